//! cache_purge tool implementation.
//!
//! Sweeps expired entries, or drops the whole cache.

use newsdesk_client::NewsSource;
use newsdesk_core::Error;
use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::session::AppState;

/// Parameters for the cache_purge tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct CachePurgeParams {
    /// Drop every entry and the seen-article set instead of only expired entries.
    #[serde(default)]
    pub all: bool,
}

/// Output from the cache_purge tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachePurgeOutput {
    /// Number of entries deleted.
    pub deleted: usize,
}

/// Implementation of the cache_purge tool.
pub async fn purge_impl<S: NewsSource>(
    state: &AppState<S>, params: CachePurgeParams,
) -> Result<CallToolResult, McpError> {
    let deleted = if params.all {
        state.service.clear_cache().await
    } else {
        state.service.sweep_cache().await
    };

    let output = CachePurgeOutput { deleted };
    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| Error::InvalidInput(format!("Failed to serialize output: {e}")))?;

    Ok(CallToolResult::success(vec![Content::text(json)]))
}
