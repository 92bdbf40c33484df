//! news_filters tool implementation.
//!
//! Reports the active filters and the values each filter accepts.

use newsdesk_client::NewsSource;
use newsdesk_core::filter::{CATEGORIES, COUNTRIES, FilterOption};
use newsdesk_core::{Error, FilterState};
use rmcp::{ErrorData as McpError, model::*};
use serde::Serialize;

use crate::session::AppState;

/// Output structure for news_filters tool.
#[derive(Debug, Clone, Serialize)]
pub struct NewsFiltersOutput {
    pub filters: FilterState,
    pub countries: &'static [FilterOption],
    pub categories: &'static [FilterOption],
}

/// Implementation of the news_filters tool.
pub async fn filters_impl<S: NewsSource>(state: &AppState<S>) -> Result<CallToolResult, McpError> {
    let filters = state.session.lock().await.filters.clone();
    let output = NewsFiltersOutput { filters, countries: COUNTRIES, categories: CATEGORIES };

    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| Error::InvalidInput(format!("Failed to serialize filters: {e}")))?;

    Ok(CallToolResult::success(vec![Content::text(json)]))
}
