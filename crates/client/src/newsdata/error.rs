//! newsdata.io client error types.

use std::sync::Arc;

/// Errors from the newsdata.io client.
#[derive(Debug, Clone, thiserror::Error)]
pub enum NewsDataError {
    /// No newsdata.io API key configured.
    #[error("missing API key: set NEWSDESK_NEWSDATA_API_KEY")]
    MissingApiKey,

    /// Base URL could not be turned into an endpoint.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// Query parameters rejected before sending.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// Authentication failed (invalid API key).
    #[error("authentication failed: invalid API key")]
    Auth,

    /// Rate limited by the news API.
    #[error("rate limited: too many requests")]
    RateLimited,

    /// Non-success HTTP response.
    #[error("HTTP error: {status}")]
    HttpError { status: u16 },

    /// Request timeout.
    #[error("request timeout")]
    Timeout,

    /// Network error.
    #[error("network error: {0}")]
    Network(Arc<reqwest::Error>),

    /// Response parse error.
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for NewsDataError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() { NewsDataError::Timeout } else { NewsDataError::Network(Arc::new(err)) }
    }
}

impl From<NewsDataError> for newsdesk_core::Error {
    fn from(err: NewsDataError) -> Self {
        use newsdesk_core::Error;

        match err {
            NewsDataError::MissingApiKey | NewsDataError::Auth => Error::NewsAuthError(err.to_string()),
            NewsDataError::RateLimited => Error::NewsRateLimited(err.to_string()),
            NewsDataError::InvalidQuery(msg) => Error::InvalidInput(msg),
            NewsDataError::HttpError { .. } => Error::HttpError(err.to_string()),
            NewsDataError::Timeout => Error::FetchTimeout(err.to_string()),
            NewsDataError::Parse(msg) => Error::Parse(msg),
            NewsDataError::InvalidBaseUrl(_) | NewsDataError::Network(_) => Error::Network(err.to_string()),
        }
    }
}
