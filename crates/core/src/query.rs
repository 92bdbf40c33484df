//! News query parameters and validation.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::cache::QueryKey;
use crate::filter::{is_supported_category, is_supported_country};

/// Maximum accepted length of the free-text query.
pub const MAX_QUERY_CHARS: usize = 512;

static LANGUAGE_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z]{2}$").expect("static pattern"));

/// Check that `code` looks like an ISO 639-1 language code.
pub fn is_language_code(code: &str) -> bool {
    LANGUAGE_CODE.is_match(code)
}

/// Errors raised by [`NewsQuery::validate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("invalid language code: {0:?}")]
    InvalidLanguage(String),

    #[error("unsupported country: {0}")]
    UnsupportedCountry(String),

    #[error("unsupported category: {0}")]
    UnsupportedCategory(String),

    #[error("query too long: {0} chars (max {MAX_QUERY_CHARS})")]
    QueryTooLong(usize),
}

/// Parameters of one news page request.
///
/// Empty strings mean "no filter" for `q`, `country` and `category`.
/// `page == 0` is the first page of a new search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsQuery {
    pub q: String,
    pub country: String,
    pub category: String,
    pub language: String,
    pub page: u64,
}

impl Default for NewsQuery {
    fn default() -> Self {
        Self { q: String::new(), country: String::new(), category: String::new(), language: "en".into(), page: 0 }
    }
}

impl NewsQuery {
    /// Same filters, different page.
    pub fn with_page(&self, page: u64) -> Self {
        Self { page, ..self.clone() }
    }

    /// Whether this request starts a new search.
    pub fn is_first_page(&self) -> bool {
        self.page == 0
    }

    /// Validate the query parameters before any cache or network access.
    pub fn validate(&self) -> Result<(), QueryError> {
        if !is_language_code(&self.language) {
            return Err(QueryError::InvalidLanguage(self.language.clone()));
        }

        if !self.country.is_empty() && !is_supported_country(&self.country) {
            return Err(QueryError::UnsupportedCountry(self.country.clone()));
        }

        if !self.category.is_empty() && !is_supported_category(&self.category) {
            return Err(QueryError::UnsupportedCategory(self.category.clone()));
        }

        let chars = self.q.chars().count();
        if chars > MAX_QUERY_CHARS {
            return Err(QueryError::QueryTooLong(chars));
        }

        Ok(())
    }

    /// Canonical cache key over all five parameters, empty ones included.
    pub fn cache_key(&self) -> QueryKey {
        let page = self.page.to_string();
        QueryKey::from_params([
            ("q", self.q.as_str()),
            ("country", self.country.as_str()),
            ("category", self.category.as_str()),
            ("language", self.language.as_str()),
            ("page", page.as_str()),
        ])
    }
}
