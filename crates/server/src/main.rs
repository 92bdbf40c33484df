//! mcp-news server entry point.
//!
//! This is the main binary that boots the MCP server on stdio transport.
//! Logging goes to stderr to avoid interfering with the JSON-RPC protocol on stdout.

use std::sync::Arc;

use anyhow::Result;
use newsdesk_client::{NewsDataClient, NewsDataConfig, NewsService};
use newsdesk_core::{AppConfig, CacheConfig};
use rmcp::service::serve_server;
use rmcp::transport::io::stdio;
use tracing_subscriber::EnvFilter;

mod handler;
mod session;
mod tools;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .init();

    let config = AppConfig::load()?;
    config.require_newsdata_api_key()?;
    let client = NewsDataClient::new(NewsDataConfig::from_app_config(&config)?)?;
    let service = NewsService::with_cache_config(client, CacheConfig { ttl: config.cache_ttl() });
    let state = Arc::new(session::AppState::new(service, &config.default_language));

    tracing::info!(base_url = %config.base_url, ttl_secs = config.cache_ttl_secs, "Starting mcp-news server on stdio transport");

    let handler = handler::NewsDeskServer::new(state);
    let transport = stdio();
    let server = serve_server(handler, transport).await?;

    server.waiting().await?;

    Ok(())
}
