//! cache_stats tool implementation.

use newsdesk_client::NewsSource;
use newsdesk_core::Error;
use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};

use crate::session::AppState;

/// Implementation of the cache_stats tool.
pub async fn stats_impl<S: NewsSource>(state: &AppState<S>) -> Result<CallToolResult, McpError> {
    let stats = state.service.cache_stats().await;
    let json = serde_json::to_string_pretty(&stats)
        .map_err(|e| Error::InvalidInput(format!("Failed to serialize cache stats: {e}")))?;

    Ok(CallToolResult::success(vec![Content::text(json)]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::testing::{FakeSource, state};
    use newsdesk_core::CacheStats;

    #[tokio::test]
    async fn test_stats_after_search() {
        let state = state(FakeSource::default().with_page("", 0, &["a", "b"], None));
        state.load_page(0, true).await.unwrap();

        let result = stats_impl(&state).await.unwrap();
        let content_val = serde_json::to_value(&result.content[0]).unwrap();
        let text = content_val
            .get("text")
            .and_then(|v| v.as_str())
            .expect("Expected text field in content");
        let stats: CacheStats = serde_json::from_str(text).unwrap();

        assert_eq!(stats, CacheStats { entries: 1, fresh_entries: 1, expired_entries: 0, seen_ids: 2 });
    }
}
