//! Application configuration with layered loading.
//!
//! This module provides configuration management using figment for layered
//! configuration loading from multiple sources:
//!
//! 1. Environment variables (NEWSDESK_*)
//! 2. TOML config file (if NEWSDESK_CONFIG_FILE set)
//! 3. Built-in defaults

use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

mod validation;

pub use validation::ConfigError;

/// Application configuration with layered loading.
///
/// Loading precedence (highest wins):
/// 1. Environment variables (NEWSDESK_*)
/// 2. TOML config file (if NEWSDESK_CONFIG_FILE set)
/// 3. Built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// newsdata.io API key.
    ///
    /// Set via NEWSDESK_NEWSDATA_API_KEY environment variable.
    /// Required only when a page has to be fetched from the API.
    #[serde(default)]
    pub newsdata_api_key: Option<String>,

    /// Base URL of the news API; `/news` is appended per request.
    ///
    /// Set via NEWSDESK_BASE_URL environment variable.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// User-Agent string for HTTP requests.
    ///
    /// Set via NEWSDESK_USER_AGENT environment variable.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// HTTP request timeout in milliseconds.
    ///
    /// Set via NEWSDESK_TIMEOUT_MS environment variable.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Freshness window of the response cache in seconds.
    ///
    /// Set via NEWSDESK_CACHE_TTL_SECS environment variable.
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,

    /// Language used when a search does not name one.
    ///
    /// Set via NEWSDESK_DEFAULT_LANGUAGE environment variable.
    #[serde(default = "default_language")]
    pub default_language: String,
}

fn default_base_url() -> String {
    "https://newsdata.io/api/1".into()
}

fn default_user_agent() -> String {
    "newsdesk/0.1".into()
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_cache_ttl_secs() -> u64 {
    900
}

fn default_language() -> String {
    "en".into()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            newsdata_api_key: None,
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout_ms: default_timeout_ms(),
            cache_ttl_secs: default_cache_ttl_secs(),
            default_language: default_language(),
        }
    }
}

impl AppConfig {
    /// Timeout as Duration for use with reqwest/tokio.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Cache freshness window as a chrono duration.
    pub fn cache_ttl(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.cache_ttl_secs as i64)
    }

    /// Load configuration from all sources with layered precedence.
    ///
    /// Priority (highest wins):
    /// 1. Environment variables prefixed with `NEWSDESK_`
    /// 2. TOML file from `NEWSDESK_CONFIG_FILE` (if set)
    /// 3. Built-in defaults via `Default::default()`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Configuration file cannot be read
    /// - Environment variables cannot be parsed
    /// - Validation fails after loading
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Ok(config_path) = std::env::var("NEWSDESK_CONFIG_FILE") {
            figment = figment.merge(Toml::file(&config_path));
        }

        figment = figment.merge(
            Env::prefixed("NEWSDESK_")
                .map(|key| key.as_str().to_lowercase().into())
                .split("__"),
        );

        let config: Self = figment.extract().map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }

    /// Check if the newsdata.io API key is available (for deferred validation).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` if the API key is not set.
    pub fn require_newsdata_api_key(&self) -> Result<&str, ConfigError> {
        self.newsdata_api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| ConfigError::Missing {
                field: "newsdata_api_key".into(),
                hint: "Set NEWSDESK_NEWSDATA_API_KEY environment variable".into(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.base_url, "https://newsdata.io/api/1");
        assert_eq!(config.user_agent, "newsdesk/0.1");
        assert_eq!(config.timeout_ms, 10_000);
        assert_eq!(config.cache_ttl_secs, 900);
        assert_eq!(config.default_language, "en");
        assert!(config.newsdata_api_key.is_none());
    }

    #[test]
    fn test_durations() {
        let config = AppConfig::default();
        assert_eq!(config.timeout(), Duration::from_millis(10_000));
        assert_eq!(config.cache_ttl(), chrono::Duration::minutes(15));
    }

    #[test]
    fn test_require_api_key_missing() {
        let config = AppConfig::default();
        let err = config.require_newsdata_api_key().unwrap_err();
        assert!(matches!(err, ConfigError::Missing { .. }));
        assert!(err.to_string().contains("NEWSDESK_NEWSDATA_API_KEY"));
    }

    #[test]
    fn test_require_api_key_empty() {
        let config = AppConfig { newsdata_api_key: Some(String::new()), ..Default::default() };
        assert!(config.require_newsdata_api_key().is_err());
    }

    #[test]
    fn test_require_api_key_present() {
        let config = AppConfig { newsdata_api_key: Some("pub_test".into()), ..Default::default() };
        let result = config.require_newsdata_api_key();
        assert_eq!(result.unwrap(), "pub_test");
    }
}
