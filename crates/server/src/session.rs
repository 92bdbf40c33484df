//! Shared server state: the cached news service and the reader's session.

use newsdesk_client::{NewsService, NewsSource};
use newsdesk_core::{Article, Error, FilterState, NewsFeed};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

/// Filters and accumulated feed of the current reader.
#[derive(Debug, Default)]
pub struct Session {
    pub filters: FilterState,
    pub feed: NewsFeed,
}

/// State shared by all tool handlers.
#[derive(Debug)]
pub struct AppState<S> {
    pub service: NewsService<S>,
    pub session: Mutex<Session>,
}

impl<S: NewsSource> AppState<S> {
    pub fn new(service: NewsService<S>, default_language: &str) -> Self {
        let session = Session { filters: FilterState::with_language(default_language), feed: NewsFeed::new() };
        Self { service, session: Mutex::new(session) }
    }

    /// Fetch `page` with the current filters and merge it into the feed.
    ///
    /// With `fresh` the feed is emptied before the request is issued. The
    /// session lock is not held while the page is fetched; a response that
    /// was overtaken by a newer request is dropped.
    pub async fn load_page(&self, page: u64, fresh: bool) -> Result<FeedView, Error> {
        let (ticket, query) = {
            let mut session = self.session.lock().await;
            if fresh {
                session.feed.clear();
            }
            (session.feed.begin_request(), session.filters.query(page))
        };

        match self.service.fetch(&query).await {
            Ok(response) => {
                let mut session = self.session.lock().await;
                if !session.feed.complete(ticket, page, response) {
                    tracing::info!(page, "news page superseded by a newer request");
                }
                Ok(FeedView::from(&session.feed))
            }
            Err(e) => {
                let message = e.to_string();
                if self.session.lock().await.feed.fail(ticket, message.clone()) {
                    tracing::warn!(page, error = %message, "failed to load news page");
                }
                Err(e.into())
            }
        }
    }
}

/// Rendered state of the feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedView {
    /// Accumulated, deduplicated articles.
    pub articles: Vec<Article>,
    /// Number of articles in `articles`.
    pub count: usize,
    /// Upstream total reported by the last page.
    pub total_results: u64,
    /// Token for the next page, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page: Option<String>,
    /// Whether another page can be loaded.
    pub has_more: bool,
}

impl From<&NewsFeed> for FeedView {
    fn from(feed: &NewsFeed) -> Self {
        Self {
            articles: feed.articles().to_vec(),
            count: feed.articles().len(),
            total_results: feed.total_results(),
            next_page: feed.next_page().map(str::to_string),
            has_more: feed.has_more(),
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Fake news source shared by the tool tests.

    use super::*;
    use async_trait::async_trait;
    use newsdesk_client::NewsDataError;
    use newsdesk_core::{NewsQuery, NewsResponse, ResponseCache};
    use std::collections::HashMap;
    use std::sync::Mutex as StdMutex;

    /// Serves canned pages keyed by `(q, page)` and records every query.
    #[derive(Default)]
    pub struct FakeSource {
        pages: HashMap<(String, u64), Result<NewsResponse, NewsDataError>>,
        pub queries: StdMutex<Vec<NewsQuery>>,
    }

    impl FakeSource {
        pub fn with_page(mut self, q: &str, page: u64, ids: &[&str], next: Option<&str>) -> Self {
            let response = NewsResponse {
                status: "success".into(),
                total_results: 30,
                results: ids.iter().map(|id| Article::new(*id, format!("Title {id}"))).collect(),
                next_page: next.map(str::to_string),
            };
            self.pages.insert((q.to_string(), page), Ok(response));
            self
        }

        pub fn with_error(mut self, q: &str, page: u64, err: NewsDataError) -> Self {
            self.pages.insert((q.to_string(), page), Err(err));
            self
        }
    }

    #[async_trait]
    impl NewsSource for FakeSource {
        async fn fetch_page(&self, query: &NewsQuery) -> Result<NewsResponse, NewsDataError> {
            self.queries.lock().unwrap().push(query.clone());
            self.pages
                .get(&(query.q.clone(), query.page))
                .cloned()
                .unwrap_or_else(|| Ok(NewsResponse { status: "success".into(), ..Default::default() }))
        }
    }

    pub fn state(source: FakeSource) -> AppState<FakeSource> {
        AppState::new(NewsService::new(source, ResponseCache::default()), "en")
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{FakeSource, state};
    use newsdesk_client::NewsDataError;

    fn ids(view: &super::FeedView) -> Vec<&str> {
        view.articles.iter().map(|a| a.article_id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_load_pages_accumulate() {
        let state = state(
            FakeSource::default()
                .with_page("", 0, &["a", "b", "c"], Some("1"))
                .with_page("", 1, &["c", "d"], None),
        );

        let first = state.load_page(0, true).await.unwrap();
        assert_eq!(ids(&first), vec!["a", "b", "c"]);
        assert!(first.has_more);

        let second = state.load_page(1, false).await.unwrap();
        assert_eq!(ids(&second), vec!["a", "b", "c", "d"]);
        assert_eq!(second.count, 4);
        assert!(!second.has_more);
    }

    #[tokio::test]
    async fn test_failure_is_recorded_in_feed() {
        let state = state(FakeSource::default().with_error("", 0, NewsDataError::HttpError { status: 500 }));

        let err = state.load_page(0, true).await.unwrap_err();
        assert!(matches!(&err, newsdesk_core::Error::HttpError(msg) if msg == "HTTP error: 500"));

        let session = state.session.lock().await;
        assert_eq!(session.feed.error(), Some("HTTP error: 500"));
        assert!(!session.feed.is_loading());
    }
}
