//! MCP tool implementations.
//!
//! This module contains all tools exposed by the newsdesk server.

pub mod cache;
pub mod news_article;
pub mod news_filters;
pub mod news_search;
pub mod signup_check;

pub use cache::CachePurgeParams;
pub use news_article::NewsArticleParams;
pub use news_search::NewsSearchParams;
pub use signup_check::SignupCheckParams;
