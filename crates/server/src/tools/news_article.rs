//! news_article tool implementation.
//!
//! Opens one article of the current feed for the details view.

use newsdesk_client::NewsSource;
use newsdesk_core::{Article, Error};
use rmcp::{ErrorData as McpError, model::*};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::session::AppState;

/// Input parameters for news_article tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct NewsArticleParams {
    /// Id of an article in the current feed.
    pub article_id: String,
}

/// Output structure for news_article tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsArticleOutput {
    /// The full article record.
    pub article: Article,
    /// Publish date as "March 5, 2025", if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_date: Option<String>,
    /// Text to hand to a read-aloud facility.
    pub read_aloud_text: String,
}

/// Implementation of the news_article tool.
pub async fn article_impl<S: NewsSource>(
    state: &AppState<S>, params: NewsArticleParams,
) -> Result<CallToolResult, McpError> {
    if params.article_id.is_empty() {
        return Err(Error::InvalidInput("article_id cannot be empty".into()).into());
    }

    let mut session = state.session.lock().await;
    let article = session
        .feed
        .select(&params.article_id)
        .ok_or_else(|| Error::ArticleNotFound(params.article_id.clone()))?;

    let output = NewsArticleOutput {
        display_date: article.display_date(),
        read_aloud_text: article.read_aloud_text(),
        article: article.clone(),
    };

    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| Error::InvalidInput(format!("Failed to serialize article: {e}")))?;

    Ok(CallToolResult::success(vec![Content::text(json)]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::testing::{FakeSource, state};

    #[tokio::test]
    async fn test_article_found() {
        let state = state(FakeSource::default().with_page("", 0, &["a", "b"], None));
        state.load_page(0, true).await.unwrap();

        let result = article_impl(&state, NewsArticleParams { article_id: "b".into() }).await.unwrap();
        let content_val = serde_json::to_value(&result.content[0]).unwrap();
        let text = content_val
            .get("text")
            .and_then(|v| v.as_str())
            .expect("Expected text field in content");
        let output: NewsArticleOutput = serde_json::from_str(text).unwrap();

        assert_eq!(output.article.article_id, "b");
        assert_eq!(output.read_aloud_text, "Title b.");
        assert!(output.display_date.is_none());

        let session = state.session.lock().await;
        assert_eq!(session.feed.selected().map(|a| a.article_id.as_str()), Some("b"));
    }

    #[tokio::test]
    async fn test_article_missing() {
        let state = state(FakeSource::default());
        let result = article_impl(&state, NewsArticleParams { article_id: "nope".into() }).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_article_empty_id() {
        let state = state(FakeSource::default());
        let result = article_impl(&state, NewsArticleParams { article_id: String::new() }).await;
        assert!(result.is_err());
    }
}
