//! Unified error types for newsdesk.
//!
//! Every variant carries a stable code prefix so that tool callers can match
//! on the message without parsing free text.

use rmcp::model::{ErrorCode, ErrorData as McpError};

use crate::query::QueryError;
use crate::signup::ValidationError;

/// Unified error types for the newsdesk server.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid input parameters (e.g., unsupported country).
    #[error("INVALID_INPUT: {0}")]
    InvalidInput(String),

    /// Transport failure while talking to the news API.
    #[error("NETWORK_ERROR: {0}")]
    Network(String),

    /// Non-success HTTP response from the news API.
    #[error("HTTP_ERROR: {0}")]
    HttpError(String),

    /// News API request timed out.
    #[error("FETCH_TIMEOUT: {0}")]
    FetchTimeout(String),

    /// News API rejected the API key.
    #[error("NEWS_AUTH_ERROR: {0}")]
    NewsAuthError(String),

    /// News API rate limited.
    #[error("NEWS_RATE_LIMITED: {0}")]
    NewsRateLimited(String),

    /// News API body could not be decoded.
    #[error("PARSE_ERROR: {0}")]
    Parse(String),

    /// No article with the given id in the current feed.
    #[error("ARTICLE_NOT_FOUND: {0}")]
    ArticleNotFound(String),

    /// Signup input rejected before any auth call.
    #[error("VALIDATION_ERROR: {0}")]
    Validation(#[from] ValidationError),
}

impl From<QueryError> for Error {
    fn from(err: QueryError) -> Self {
        Error::InvalidInput(err.to_string())
    }
}

impl From<Error> for McpError {
    fn from(err: Error) -> Self {
        let (code, message) = match &err {
            Error::InvalidInput(msg) => (-32602, msg.clone()),
            Error::Network(msg) => (-32000, msg.clone()),
            Error::HttpError(msg) => (-32008, msg.clone()),
            Error::FetchTimeout(msg) => (-32006, msg.clone()),
            Error::NewsAuthError(msg) => (-32009, msg.clone()),
            Error::NewsRateLimited(msg) => (-32010, msg.clone()),
            Error::Parse(msg) => (-32001, msg.clone()),
            Error::ArticleNotFound(id) => (-32004, format!("no article with id {id} in the current feed")),
            Error::Validation(e) => (-32602, e.to_string()),
        };

        McpError { code: ErrorCode(code), message: message.into(), data: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::ArticleNotFound("abc123".to_string());
        assert!(err.to_string().contains("ARTICLE_NOT_FOUND"));
        assert!(err.to_string().contains("abc123"));
    }

    #[test]
    fn test_error_to_mcp_error() {
        let err = Error::HttpError("HTTP error: 500".to_string());
        let mcp_err: McpError = err.into();
        assert_eq!(mcp_err.code.0, -32008);
        assert_eq!(mcp_err.message, "HTTP error: 500");
    }

    #[test]
    fn test_validation_error_keeps_message() {
        let err: Error = ValidationError::PasswordMismatch.into();
        let mcp_err: McpError = err.into();
        assert_eq!(mcp_err.message, "Passwords do not match");
    }

    #[test]
    fn test_query_error_is_invalid_input() {
        let err: Error = QueryError::UnsupportedCountry("zz".into()).into();
        assert!(matches!(err, Error::InvalidInput(_)));
    }
}
