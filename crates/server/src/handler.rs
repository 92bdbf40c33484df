//! MCP server handler implementation.
//!
//! This module defines the main server handler that
//! routes tool calls to the appropriate implementations.
use std::sync::Arc;

use newsdesk_client::NewsDataClient;
use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{
        tool::{ToolCallContext, ToolRouter},
        wrapper::Parameters,
    },
    model::{
        CallToolRequestParam, CallToolResult, Implementation, ListToolsResult, PaginatedRequestParam, ProtocolVersion,
        ServerCapabilities, ServerInfo,
    },
    service::{RequestContext, RoleServer},
    tool, tool_router,
};

use crate::session::AppState;
use crate::tools::{
    CachePurgeParams, NewsArticleParams, NewsSearchParams, SignupCheckParams, cache, news_article, news_filters,
    news_search, signup_check,
};

/// The main MCP server handler for mcp-news.
#[derive(Clone)]
pub struct NewsDeskServer {
    tool_router: ToolRouter<Self>,
    state: Arc<AppState<NewsDataClient>>,
}

/// Tool router implementation using the #[tool_router] macro.
///
/// This macro generates the routing logic that maps tool names to handler methods.
#[tool_router]
impl NewsDeskServer {
    /// Create a new server handler around shared state.
    pub fn new(state: Arc<AppState<NewsDataClient>>) -> Self {
        Self { tool_router: Self::tool_router(), state }
    }

    /// Start a new news search.
    ///
    /// Omitted filters keep their current value. The feed is cleared and page 0 is loaded.
    #[tool(
        description = "Search latest news. Updates the query/country/category/language filters, starts a fresh feed and returns the first page."
    )]
    async fn news_search(&self, params: Parameters<NewsSearchParams>) -> Result<CallToolResult, McpError> {
        news_search::search_impl(&self.state, params.0).await
    }

    #[tool(description = "Load the next page of the current search and append its new articles to the feed.")]
    async fn news_load_more(&self) -> Result<CallToolResult, McpError> {
        news_search::load_more_impl(&self.state).await
    }

    #[tool(description = "Clear query, country and category (language is kept) and reload the first page.")]
    async fn news_reset_filters(&self) -> Result<CallToolResult, McpError> {
        news_search::reset_filters_impl(&self.state).await
    }

    /// Open an article from the current feed.
    #[tool(description = "Open an article from the current feed. Returns the article, a long-form date and read-aloud text.")]
    async fn news_article(&self, params: Parameters<NewsArticleParams>) -> Result<CallToolResult, McpError> {
        news_article::article_impl(&self.state, params.0).await
    }

    #[tool(description = "Show the active filters and the supported countries and categories.")]
    async fn news_filters(&self) -> Result<CallToolResult, McpError> {
        news_filters::filters_impl(&self.state).await
    }

    #[tool(description = "Validate signup form input: password confirmation first, then minimum length.")]
    async fn signup_check(&self, params: Parameters<SignupCheckParams>) -> Result<CallToolResult, McpError> {
        signup_check::signup_check_impl(params.0).await
    }

    #[tool(description = "Report response cache statistics: entries, fresh/expired counts and tracked article ids.")]
    async fn cache_stats(&self) -> Result<CallToolResult, McpError> {
        cache::stats_impl(&self.state).await
    }

    /// Purge the response cache.
    ///
    /// By default only expired entries are removed; `all = true` drops everything.
    #[tool(description = "Purge expired response cache entries, or everything with all=true.")]
    async fn cache_purge(&self, params: Parameters<CachePurgeParams>) -> Result<CallToolResult, McpError> {
        cache::purge_impl(&self.state, params.0).await
    }
}

impl ServerHandler for NewsDeskServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: "mcp-news".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            instructions: Some(
                "Search the news with news_search, page with news_load_more, open items with news_article.".into(),
            ),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self, _request: Option<PaginatedRequestParam>, _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, rmcp::model::ErrorData> {
        Ok(ListToolsResult { meta: None, tools: self.tool_router.list_all(), next_cursor: None })
    }

    async fn call_tool(
        &self, request: CallToolRequestParam, context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, rmcp::model::ErrorData> {
        self.tool_router
            .call(ToolCallContext::new(self, request, context))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use newsdesk_client::{NewsDataConfig, NewsService};
    use newsdesk_core::ResponseCache;

    fn server() -> NewsDeskServer {
        let client =
            NewsDataClient::new(NewsDataConfig { api_key: "pub_test".into(), ..Default::default() }).unwrap();
        let state = AppState::new(NewsService::new(client, ResponseCache::default()), "en");
        NewsDeskServer::new(Arc::new(state))
    }

    #[test]
    fn test_all_tools_registered() {
        let mut names: Vec<String> = server().tool_router.list_all().into_iter().map(|t| t.name.to_string()).collect();
        names.sort();

        assert_eq!(
            names,
            vec![
                "cache_purge",
                "cache_stats",
                "news_article",
                "news_filters",
                "news_load_more",
                "news_reset_filters",
                "news_search",
                "signup_check",
            ]
        );
    }

    #[test]
    fn test_server_info() {
        let info = server().get_info();
        assert_eq!(info.server_info.name, "mcp-news");
    }
}
