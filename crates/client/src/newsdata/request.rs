//! newsdata.io request parameters.

use newsdesk_core::NewsQuery;
use serde::Serialize;

/// Query string of `GET /news`.
///
/// `q`, `country` and `category` are sent only when non-empty, `page` only
/// past the first page. Values are URL-encoded by the HTTP client.
#[derive(Debug, Clone, Serialize)]
pub struct NewsRequest<'a> {
    pub apikey: &'a str,

    pub language: &'a str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<&'a str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<&'a str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<&'a str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() { None } else { Some(value) }
}

impl<'a> NewsRequest<'a> {
    pub fn new(apikey: &'a str, query: &'a NewsQuery) -> Self {
        Self {
            apikey,
            language: &query.language,
            q: non_empty(&query.q),
            country: non_empty(&query.country),
            category: non_empty(&query.category),
            page: (query.page > 0).then_some(query.page),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page_omits_empty_filters() {
        let query = NewsQuery::default();
        let req = NewsRequest::new("pub_key", &query);
        let value = serde_json::to_value(&req).unwrap();

        assert_eq!(value, serde_json::json!({ "apikey": "pub_key", "language": "en" }));
    }

    #[test]
    fn test_all_filters_and_page() {
        let query = NewsQuery {
            q: "solar power".into(),
            country: "au".into(),
            category: "environment".into(),
            language: "en".into(),
            page: 2,
        };
        let req = NewsRequest::new("pub_key", &query);

        assert_eq!(req.q, Some("solar power"));
        assert_eq!(req.country, Some("au"));
        assert_eq!(req.category, Some("environment"));
        assert_eq!(req.page, Some(2));
    }
}
