//! Response cache operations.
//!
//! Provides storage and retrieval of news pages with a freshness window
//! and the cache-scoped seen-article set.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::key::QueryKey;
use crate::model::NewsResponse;

/// Configuration for the response cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// How long a stored page may be served (default: 15 minutes).
    pub ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { ttl: Duration::minutes(15) }
    }
}

/// A stored page with the time it was stored.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub payload: NewsResponse,
    pub stored_at: DateTime<Utc>,
}

impl CacheEntry {
    /// An entry is expired once it is strictly older than `ttl`.
    pub fn is_expired(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now - self.stored_at > ttl
    }
}

/// Cache statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    pub entries: usize,
    pub fresh_entries: usize,
    pub expired_entries: usize,
    pub seen_ids: usize,
}

/// Time-expiring store of news pages keyed by [`QueryKey`].
///
/// Besides the entries it tracks every article id it has emitted since the
/// last [`reset_seen`](Self::reset_seen), and never stores the same id twice
/// within that epoch. A page fetched in an earlier epoch is handed back
/// without touching the seen set or the entries.
#[derive(Debug, Default)]
pub struct ResponseCache {
    entries: HashMap<QueryKey, CacheEntry>,
    seen_ids: HashSet<String>,
    epoch: u64,
    config: CacheConfig,
}

impl ResponseCache {
    pub fn new(config: CacheConfig) -> Self {
        Self { entries: HashMap::new(), seen_ids: HashSet::new(), epoch: 0, config }
    }

    /// Current dedup epoch. Bumped by [`reset_seen`](Self::reset_seen) and [`clear`](Self::clear).
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Get a stored page if present and fresh.
    pub fn lookup(&mut self, key: &QueryKey) -> Option<NewsResponse> {
        self.lookup_at(key, Utc::now())
    }

    /// Get a stored page as of `now`. An expired entry is evicted.
    pub fn lookup_at(&mut self, key: &QueryKey, now: DateTime<Utc>) -> Option<NewsResponse> {
        let entry = match self.entries.get(key) {
            Some(entry) => entry,
            None => {
                tracing::debug!(%key, "cache miss");
                return None;
            }
        };

        if entry.is_expired(now, self.config.ttl) {
            tracing::debug!(%key, "cache entry expired");
            self.entries.remove(key);
            return None;
        }

        tracing::debug!(%key, "cache hit");
        Some(entry.payload.clone())
    }

    /// Dedup `response` against the seen set and store it.
    ///
    /// Returns the stored (post-dedup) page.
    pub fn store(&mut self, key: QueryKey, response: NewsResponse) -> NewsResponse {
        self.store_at(key, response, Utc::now())
    }

    /// Dedup and store as of `now`, then sweep expired entries.
    pub fn store_at(&mut self, key: QueryKey, response: NewsResponse, now: DateTime<Utc>) -> NewsResponse {
        self.store_in_at(self.epoch, key, response, now)
    }

    /// Store a page fetched during `epoch`.
    ///
    /// When `epoch` is no longer current the page is returned as received
    /// and nothing is recorded.
    pub fn store_in(&mut self, epoch: u64, key: QueryKey, response: NewsResponse) -> NewsResponse {
        self.store_in_at(epoch, key, response, Utc::now())
    }

    pub fn store_in_at(
        &mut self, epoch: u64, key: QueryKey, response: NewsResponse, now: DateTime<Utc>,
    ) -> NewsResponse {
        if epoch != self.epoch {
            tracing::debug!(%key, epoch, current = self.epoch, "page from a previous epoch not stored");
            return response;
        }

        let received = response.results.len();
        let results: Vec<_> = response
            .results
            .into_iter()
            .filter(|article| self.seen_ids.insert(article.article_id.clone()))
            .collect();

        let payload = NewsResponse { total_results: results.len() as u64, results, ..response };

        tracing::debug!(%key, received, kept = payload.results.len(), "stored in cache");

        self.entries.insert(key, CacheEntry { payload: payload.clone(), stored_at: now });
        self.sweep_at(now);

        payload
    }

    /// Start a new dedup epoch.
    pub fn reset_seen(&mut self) {
        tracing::debug!(cleared = self.seen_ids.len(), "reset seen article ids");
        self.seen_ids.clear();
        self.epoch += 1;
    }

    /// Remove every expired entry. Returns the number removed.
    pub fn sweep(&mut self) -> usize {
        self.sweep_at(Utc::now())
    }

    pub fn sweep_at(&mut self, now: DateTime<Utc>) -> usize {
        let ttl = self.config.ttl;
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(now, ttl));
        let removed = before - self.entries.len();

        if removed > 0 {
            tracing::debug!(removed, "evicted expired cache entries");
        }
        removed
    }

    /// Drop all entries and the seen set. Returns the number of entries removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        self.seen_ids.clear();
        self.epoch += 1;
        tracing::info!(removed, "response cache cleared");
        removed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn has_seen(&self, article_id: &str) -> bool {
        self.seen_ids.contains(article_id)
    }

    /// Get cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats_at(Utc::now())
    }

    pub fn stats_at(&self, now: DateTime<Utc>) -> CacheStats {
        let expired_entries = self
            .entries
            .values()
            .filter(|entry| entry.is_expired(now, self.config.ttl))
            .count();

        CacheStats {
            entries: self.entries.len(),
            fresh_entries: self.entries.len() - expired_entries,
            expired_entries,
            seen_ids: self.seen_ids.len(),
        }
    }
}
