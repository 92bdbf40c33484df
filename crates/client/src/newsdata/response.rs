//! newsdata.io response types and normalization.

use newsdesk_core::{Article, NewsResponse};
use serde::Deserialize;
use serde_json::Value;

/// Raw body of `GET /news`. Every field may be missing.
#[derive(Debug, Deserialize)]
pub struct NewsDataApiResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, rename = "totalResults")]
    pub total_results: Option<u64>,
    #[serde(default)]
    pub results: Option<Vec<Article>>,
    #[serde(default, rename = "nextPage")]
    pub next_page: Option<Value>,
}

impl From<NewsDataApiResponse> for NewsResponse {
    /// Missing totals become 0, missing results an empty list, and a
    /// missing or empty next page token `None`.
    fn from(raw: NewsDataApiResponse) -> Self {
        let next_page = match raw.next_page {
            Some(Value::String(token)) if !token.is_empty() => Some(token),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        };

        NewsResponse {
            status: raw.status.unwrap_or_default(),
            total_results: raw.total_results.unwrap_or(0),
            results: raw.results.unwrap_or_default(),
            next_page,
        }
    }
}
