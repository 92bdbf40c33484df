//! In-memory cache for news API pages.
//!
//! This module provides a time-expiring response cache keyed by the
//! canonical form of the query parameters. It supports:
//!
//! - Order-independent canonical keys
//! - Lazy expiry at lookup plus a sweep on every store
//! - Per-epoch article dedup: an article id is emitted at most once between
//!   two calls to [`ResponseCache::reset_seen`]

pub mod key;
pub mod store;

pub use key::QueryKey;
pub use store::{CacheConfig, CacheEntry, CacheStats, ResponseCache};
