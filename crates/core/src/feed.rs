//! Accumulated news feed of one search session.
//!
//! The feed merges successive pages of the same search into one list and
//! keeps its own ordered list of seen article ids. It is independent of the
//! cache's seen set: the cache forgets on every first-page request, the feed
//! only when a new search starts (page 0) or it is cleared.
//!
//! Requests are numbered with [`Ticket`]s. Only the most recently issued
//! ticket may merge or record an error, so a slow response to an older
//! search can never overwrite a newer one.

use std::collections::HashSet;

use crate::model::{Article, NewsResponse};

/// Sequence number of a feed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

#[derive(Debug, Default)]
pub struct NewsFeed {
    articles: Vec<Article>,
    seen_ids: Vec<String>,
    seen_lookup: HashSet<String>,
    total_results: u64,
    next_page: Option<String>,
    selected: Option<String>,
    error: Option<String>,
    loading: bool,
    latest_ticket: u64,
}

impl NewsFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Seen ids in the order they were first accepted.
    pub fn seen_ids(&self) -> &[String] {
        &self.seen_ids
    }

    /// Upstream total, not the deduplicated count.
    pub fn total_results(&self) -> u64 {
        self.total_results
    }

    pub fn next_page(&self) -> Option<&str> {
        self.next_page.as_deref()
    }

    pub fn has_more(&self) -> bool {
        self.next_page.is_some()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Merge one page into the feed.
    ///
    /// A first page (`page == 0`) starts a new session. Articles whose id was
    /// already accepted are dropped; pagination state is always taken from
    /// `response`. Returns the number of newly accepted articles.
    pub fn merge(&mut self, page: u64, response: NewsResponse) -> usize {
        if page == 0 {
            self.articles.clear();
            self.seen_ids.clear();
            self.seen_lookup.clear();
        }

        let before = self.articles.len();
        for article in response.results {
            if self.seen_lookup.insert(article.article_id.clone()) {
                self.seen_ids.push(article.article_id.clone());
                self.articles.push(article);
            }
        }

        self.total_results = response.total_results;
        self.next_page = response.next_page;

        self.articles.len() - before
    }

    /// Empty the feed before a new search.
    pub fn clear(&mut self) {
        self.articles.clear();
        self.seen_ids.clear();
        self.seen_lookup.clear();
        self.next_page = None;
        self.total_results = 0;
    }

    /// Register a new request; any older ticket becomes stale.
    pub fn begin_request(&mut self) -> Ticket {
        self.latest_ticket += 1;
        self.loading = true;
        self.error = None;
        Ticket(self.latest_ticket)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest_ticket
    }

    /// Merge the response of `ticket` if it is still the latest request.
    ///
    /// Returns `false` and leaves the feed untouched for a stale ticket.
    pub fn complete(&mut self, ticket: Ticket, page: u64, response: NewsResponse) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(ticket = ticket.0, latest = self.latest_ticket, "dropping stale news page");
            return false;
        }

        self.loading = false;
        let accepted = self.merge(page, response);
        tracing::debug!(page, accepted, total = self.articles.len(), "merged news page");
        true
    }

    /// Record the failure of `ticket` if it is still the latest request.
    pub fn fail(&mut self, ticket: Ticket, message: impl Into<String>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }

        self.loading = false;
        self.error = Some(message.into());
        true
    }

    pub fn find(&self, article_id: &str) -> Option<&Article> {
        self.articles.iter().find(|a| a.article_id == article_id)
    }

    /// Select an article for the details view.
    pub fn select(&mut self, article_id: &str) -> Option<&Article> {
        let found = self.articles.iter().find(|a| a.article_id == article_id)?;
        self.selected = Some(found.article_id.clone());
        Some(found)
    }

    pub fn selected(&self) -> Option<&Article> {
        self.selected.as_deref().and_then(|id| self.find(id))
    }
}
