//! Client code for newsdesk.
//!
//! This crate provides the newsdata.io HTTP client and the cached fetch
//! orchestrator shared by the server.

pub mod newsdata;
pub mod service;

pub use newsdata::{NewsDataClient, NewsDataConfig, NewsDataError};
pub use service::{NewsService, NewsSource};
