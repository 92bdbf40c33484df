//! news_search, news_load_more and news_reset_filters tool implementations.
//!
//! All three drive the session feed: a search or a filter reset starts a new
//! session from page 0, load-more appends the next page of the current one.

use newsdesk_client::NewsSource;
use newsdesk_core::Error;
use rmcp::{ErrorData as McpError, model::*};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::session::{AppState, FeedView};

/// Input parameters for news_search tool.
///
/// Omitted fields keep their current value; pass an empty string to clear one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct NewsSearchParams {
    /// Free-text search query.
    #[serde(default)]
    pub query: Option<String>,

    /// Country code: au, ca, gb, in, us, za.
    #[serde(default)]
    pub country: Option<String>,

    /// Category: business, entertainment, environment, food, health,
    /// politics, science, sports, technology, top, world.
    #[serde(default)]
    pub category: Option<String>,

    /// Content language (ISO 639-1, e.g., "en").
    #[serde(default)]
    pub language: Option<String>,
}

fn feed_result(view: &FeedView) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(view)
        .map_err(|e| Error::InvalidInput(format!("Failed to serialize feed: {e}")))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

/// Implementation of the news_search tool.
pub async fn search_impl<S: NewsSource>(
    state: &AppState<S>, params: NewsSearchParams,
) -> Result<CallToolResult, McpError> {
    {
        let mut session = state.session.lock().await;
        let mut filters = session.filters.clone();

        if let Some(query) = params.query {
            filters.set_search_query(query.trim());
        }
        if let Some(country) = params.country {
            filters.set_country(country.trim().to_lowercase());
        }
        if let Some(category) = params.category {
            filters.set_category(category.trim().to_lowercase());
        }
        if let Some(language) = params.language {
            filters.set_language(language.trim().to_lowercase());
        }

        filters.query(0).validate().map_err(Error::from)?;

        tracing::info!(query = %filters.search_query, country = %filters.country, category = %filters.category, "new news search");
        session.filters = filters;
    }

    let view = state.load_page(0, true).await?;
    feed_result(&view)
}

/// Implementation of the news_load_more tool.
pub async fn load_more_impl<S: NewsSource>(state: &AppState<S>) -> Result<CallToolResult, McpError> {
    let next_page = {
        let session = state.session.lock().await;
        match session.feed.next_page() {
            Some(token) => token.to_string(),
            None => return feed_result(&FeedView::from(&session.feed)),
        }
    };

    let page: u64 = next_page
        .parse()
        .map_err(|_| Error::InvalidInput(format!("unsupported next page token: {next_page}")))?;

    let view = state.load_page(page, false).await?;
    feed_result(&view)
}

/// Implementation of the news_reset_filters tool.
pub async fn reset_filters_impl<S: NewsSource>(state: &AppState<S>) -> Result<CallToolResult, McpError> {
    state.session.lock().await.filters.reset();
    tracing::info!("filters reset");

    let view = state.load_page(0, true).await?;
    feed_result(&view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::testing::{FakeSource, state};
    use newsdesk_client::NewsDataError;

    fn view_of(result: &CallToolResult) -> FeedView {
        let content_val = serde_json::to_value(&result.content[0]).unwrap();
        let text = content_val
            .get("text")
            .and_then(|v| v.as_str())
            .expect("Expected text field in content");
        serde_json::from_str(text).unwrap()
    }

    fn ids(view: &FeedView) -> Vec<&str> {
        view.articles.iter().map(|a| a.article_id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_search_then_load_more() {
        let state = state(
            FakeSource::default()
                .with_page("rust", 0, &["a", "b", "c"], Some("1"))
                .with_page("rust", 1, &["c", "d"], Some("2")),
        );

        let params = NewsSearchParams { query: Some("rust".into()), ..Default::default() };
        let first = view_of(&search_impl(&state, params).await.unwrap());
        assert_eq!(ids(&first), vec!["a", "b", "c"]);
        assert_eq!(first.next_page.as_deref(), Some("1"));

        let more = view_of(&load_more_impl(&state).await.unwrap());
        assert_eq!(ids(&more), vec!["a", "b", "c", "d"]);
        assert_eq!(more.next_page.as_deref(), Some("2"));
    }

    #[tokio::test]
    async fn test_new_search_starts_fresh_session() {
        let state = state(
            FakeSource::default()
                .with_page("rust", 0, &["a", "b", "c"], None)
                .with_page("go", 0, &["c", "e"], None),
        );

        search_impl(&state, NewsSearchParams { query: Some("rust".into()), ..Default::default() })
            .await
            .unwrap();
        let second =
            view_of(&search_impl(&state, NewsSearchParams { query: Some("go".into()), ..Default::default() }).await.unwrap());

        assert_eq!(ids(&second), vec!["c", "e"]);
    }

    #[tokio::test]
    async fn test_search_keeps_omitted_filters() {
        let state = state(FakeSource::default());

        let params = NewsSearchParams { query: Some("budget".into()), country: Some("IN".into()), ..Default::default() };
        search_impl(&state, params).await.unwrap();
        let params = NewsSearchParams { category: Some("politics".into()), ..Default::default() };
        search_impl(&state, params).await.unwrap();

        let queries = state.service.source().queries.lock().unwrap().clone();
        let last = queries.last().unwrap();
        assert_eq!(last.q, "budget");
        assert_eq!(last.country, "in");
        assert_eq!(last.category, "politics");
        assert_eq!(last.page, 0);
    }

    #[tokio::test]
    async fn test_invalid_filter_leaves_session_untouched() {
        let state = state(FakeSource::default());

        let params = NewsSearchParams { country: Some("fr".into()), ..Default::default() };
        assert!(search_impl(&state, params).await.is_err());

        assert!(state.service.source().queries.lock().unwrap().is_empty());
        assert_eq!(state.session.lock().await.filters.country, "");
    }

    #[tokio::test]
    async fn test_load_more_without_next_page() {
        let state = state(FakeSource::default().with_page("", 0, &["a"], None));
        search_impl(&state, NewsSearchParams::default()).await.unwrap();

        let view = view_of(&load_more_impl(&state).await.unwrap());
        assert!(!view.has_more);
        assert_eq!(ids(&view), vec!["a"]);
        assert_eq!(state.service.source().queries.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_load_more_bad_token() {
        let state = state(FakeSource::default().with_page("", 0, &["a"], Some("abc")));
        search_impl(&state, NewsSearchParams::default()).await.unwrap();

        assert!(load_more_impl(&state).await.is_err());
    }

    #[tokio::test]
    async fn test_reset_filters_keeps_language() {
        let state = state(FakeSource::default());
        let params = NewsSearchParams {
            query: Some("cricket".into()),
            country: Some("za".into()),
            language: Some("af".into()),
            ..Default::default()
        };
        search_impl(&state, params).await.unwrap();

        reset_filters_impl(&state).await.unwrap();

        let queries = state.service.source().queries.lock().unwrap().clone();
        let last = queries.last().unwrap();
        assert_eq!(last.q, "");
        assert_eq!(last.country, "");
        assert_eq!(last.language, "af");
    }

    #[tokio::test]
    async fn test_search_error_message_reaches_caller() {
        let state =
            state(FakeSource::default().with_error("storm", 0, NewsDataError::HttpError { status: 502 }));

        let params = NewsSearchParams { query: Some("storm".into()), ..Default::default() };
        let err = search_impl(&state, params).await.unwrap_err();
        assert_eq!(err.message, "HTTP error: 502");
    }
}
