//! Search filter state and the catalog of supported filter values.

use serde::{Deserialize, Serialize};

use crate::query::NewsQuery;

/// A filter value with its display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub code: &'static str,
    pub name: &'static str,
}

/// Countries accepted by the news API filter.
pub const COUNTRIES: &[FilterOption] = &[
    FilterOption { code: "au", name: "Australia" },
    FilterOption { code: "ca", name: "Canada" },
    FilterOption { code: "gb", name: "United Kingdom" },
    FilterOption { code: "in", name: "India" },
    FilterOption { code: "us", name: "United States" },
    FilterOption { code: "za", name: "South Africa" },
];

/// Categories accepted by the news API filter.
pub const CATEGORIES: &[FilterOption] = &[
    FilterOption { code: "business", name: "Business" },
    FilterOption { code: "entertainment", name: "Entertainment" },
    FilterOption { code: "environment", name: "Environment" },
    FilterOption { code: "food", name: "Food" },
    FilterOption { code: "health", name: "Health" },
    FilterOption { code: "politics", name: "Politics" },
    FilterOption { code: "science", name: "Science" },
    FilterOption { code: "sports", name: "Sports" },
    FilterOption { code: "technology", name: "Technology" },
    FilterOption { code: "top", name: "Top News" },
    FilterOption { code: "world", name: "World" },
];

pub fn is_supported_country(code: &str) -> bool {
    COUNTRIES.iter().any(|c| c.code == code)
}

pub fn is_supported_category(code: &str) -> bool {
    CATEGORIES.iter().any(|c| c.code == code)
}

/// The filters of the current search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub search_query: String,
    pub country: String,
    pub category: String,
    pub language: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::with_language("en")
    }
}

impl FilterState {
    pub fn with_language(language: impl Into<String>) -> Self {
        Self { search_query: String::new(), country: String::new(), category: String::new(), language: language.into() }
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn set_country(&mut self, country: impl Into<String>) {
        self.country = country.into();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = language.into();
    }

    /// Clear query, country and category. The language is kept.
    pub fn reset(&mut self) {
        self.search_query.clear();
        self.country.clear();
        self.category.clear();
    }

    /// Build the request for `page` of the current search.
    pub fn query(&self, page: u64) -> NewsQuery {
        NewsQuery {
            q: self.search_query.clone(),
            country: self.country.clone(),
            category: self.category.clone(),
            language: self.language.clone(),
            page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_keeps_language() {
        let mut filters = FilterState::default();
        filters.set_search_query("elections");
        filters.set_country("in");
        filters.set_category("politics");
        filters.set_language("hi");

        filters.reset();
        assert_eq!(filters, FilterState::with_language("hi"));
    }

    #[test]
    fn test_query_from_filters() {
        let mut filters = FilterState::default();
        filters.set_search_query("cricket");
        filters.set_country("za");

        let query = filters.query(3);
        assert_eq!(query.q, "cricket");
        assert_eq!(query.country, "za");
        assert_eq!(query.category, "");
        assert_eq!(query.language, "en");
        assert_eq!(query.page, 3);
    }

    #[test]
    fn test_catalog() {
        assert!(is_supported_country("gb"));
        assert!(!is_supported_country("uk"));
        assert!(is_supported_category("top"));
        assert!(!is_supported_category("Top"));
        assert_eq!(COUNTRIES.len(), 6);
        assert_eq!(CATEGORIES.len(), 11);
    }
}
