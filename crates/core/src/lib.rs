//! Core types and shared functionality for newsdesk.
//!
//! This crate provides:
//! - News data model and query parameters
//! - In-memory response cache with per-epoch article dedup
//! - Accumulated news feed with session-scoped dedup
//! - Filter state, signup validation, unified error types
//! - Configuration structures

pub mod cache;
pub mod config;
pub mod error;
pub mod feed;
pub mod filter;
pub mod model;
pub mod query;
pub mod signup;

pub use cache::{CacheConfig, CacheStats, QueryKey, ResponseCache};
pub use config::{AppConfig, ConfigError};
pub use error::Error;
pub use feed::{NewsFeed, Ticket};
pub use filter::FilterState;
pub use model::{Article, NewsResponse};
pub use query::{NewsQuery, QueryError};
pub use signup::{SignupForm, ValidationError};
