//! Cached news fetching.
//!
//! [`NewsService`] sits between callers and a [`NewsSource`]:
//!
//! 1. a first-page request (`page == 0`) starts a new dedup epoch in the cache;
//! 2. a fresh cached page is returned without touching the source;
//! 3. otherwise the source is asked exactly once, and the page is
//!    deduplicated, stored and returned in its stored form.
//!
//! A page whose dedup epoch was replaced while it was in flight is returned
//! as received and not cached.

use async_trait::async_trait;
use newsdesk_core::{CacheConfig, CacheStats, NewsQuery, NewsResponse, ResponseCache};
use tokio::sync::Mutex;

use crate::newsdata::NewsDataError;

/// Anything that can produce one page of news for a query.
#[async_trait]
pub trait NewsSource: Send + Sync {
    async fn fetch_page(&self, query: &NewsQuery) -> Result<NewsResponse, NewsDataError>;
}

/// Fetch orchestrator owning its response cache.
#[derive(Debug)]
pub struct NewsService<S> {
    source: S,
    cache: Mutex<ResponseCache>,
}

impl<S: NewsSource> NewsService<S> {
    pub fn new(source: S, cache: ResponseCache) -> Self {
        Self { source, cache: Mutex::new(cache) }
    }

    pub fn with_cache_config(source: S, config: CacheConfig) -> Self {
        Self::new(source, ResponseCache::new(config))
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch one page of news, serving it from the cache when fresh.
    ///
    /// The cache lock is released while the source is queried.
    pub async fn fetch(&self, query: &NewsQuery) -> Result<NewsResponse, NewsDataError> {
        query.validate().map_err(|e| NewsDataError::InvalidQuery(e.to_string()))?;

        let key = query.cache_key();

        let epoch = {
            let mut cache = self.cache.lock().await;
            if query.is_first_page() {
                cache.reset_seen();
            }
            if let Some(cached) = cache.lookup(&key) {
                tracing::debug!(%key, "returning cached news page");
                return Ok(cached);
            }
            cache.epoch()
        };

        let fetched = match self.source.fetch_page(query).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(%key, error = %e, "news fetch failed");
                return Err(e);
            }
        };

        let stored = self.cache.lock().await.store_in(epoch, key, fetched);
        Ok(stored)
    }

    pub async fn cache_stats(&self) -> CacheStats {
        self.cache.lock().await.stats()
    }

    /// Remove expired cache entries. Returns the number removed.
    pub async fn sweep_cache(&self) -> usize {
        self.cache.lock().await.sweep()
    }

    /// Drop every entry and the seen set. Returns the number of entries removed.
    pub async fn clear_cache(&self) -> usize {
        self.cache.lock().await.clear()
    }
}
