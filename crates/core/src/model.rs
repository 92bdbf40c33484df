//! News data model shared by the client, the cache, and the feed.
//!
//! Field names follow the newsdata.io wire format so that a decoded API
//! page can be cached and re-served without translation.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

/// A single news article as delivered by the news API.
///
/// Only `article_id` is required; every display field tolerates both a
/// missing key and an explicit `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub article_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub keywords: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub creator: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, rename = "pubDate")]
    pub pub_date: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub source_id: Option<String>,
    #[serde(default)]
    pub source_priority: Option<u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub country: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: Vec<String>,
    #[serde(default)]
    pub language: Option<String>,
}

/// One page of news results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsResponse {
    pub status: String,
    pub total_results: u64,
    pub results: Vec<Article>,
    pub next_page: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Article {
    /// Create an article with only an id and a title.
    pub fn new(article_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            article_id: article_id.into(),
            title: title.into(),
            link: None,
            keywords: Vec::new(),
            creator: Vec::new(),
            description: None,
            content: None,
            pub_date: None,
            image_url: None,
            source_id: None,
            source_priority: None,
            country: Vec::new(),
            category: Vec::new(),
            language: None,
        }
    }

    /// Text handed to the read-aloud facility: title, description, content.
    pub fn read_aloud_text(&self) -> String {
        let mut parts = vec![format!("{}.", self.title.trim())];
        for part in [&self.description, &self.content].into_iter().flatten() {
            let part = part.trim();
            if !part.is_empty() {
                parts.push(part.to_string());
            }
        }
        parts.join(" ")
    }

    /// Publish date formatted as "March 5, 2025".
    ///
    /// The API publishes `YYYY-MM-DD HH:MM:SS`; anything else is returned as-is.
    pub fn display_date(&self) -> Option<String> {
        let raw = self.pub_date.as_deref()?;
        match NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
            Ok(dt) => Some(dt.format("%B %-d, %Y").to_string()),
            Err(_) => Some(raw.to_string()),
        }
    }
}

impl NewsResponse {
    /// Check if the API reported another page.
    pub fn has_more(&self) -> bool {
        self.next_page.is_some()
    }

    /// Get the number of articles in this page.
    pub fn result_count(&self) -> usize {
        self.results.len()
    }
}
