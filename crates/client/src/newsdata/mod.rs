//! newsdata.io API client.
//!
//! Provides a client for the newsdata.io latest-news endpoint with request
//! validation and response normalization.
//!
//! ### API
//!
//! - **Endpoint**: `https://newsdata.io/api/1/news`
//! - **Authentication**: `apikey` query parameter.
//! - **Pagination**: the response carries a `nextPage` token which is sent
//!   back as `page` for the following request.
//! - **Failures**: no retry and no backoff; every failure is returned to the
//!   caller as-is.
//! - **Normalization**: converts the raw body into a [`NewsResponse`].

pub mod error;
pub mod request;
pub mod response;

pub use error::NewsDataError;
pub use request::NewsRequest;
pub use response::NewsDataApiResponse;

use async_trait::async_trait;
use newsdesk_core::{AppConfig, NewsQuery, NewsResponse};
use reqwest::header;
use std::sync::Arc;
use std::time::{Duration, Instant};
use url::Url;

use crate::service::NewsSource;

/// Default base URL for the newsdata.io API.
const DEFAULT_BASE_URL: &str = "https://newsdata.io/api/1";

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default user agent.
const DEFAULT_USER_AGENT: &str = "newsdesk/0.1";

/// newsdata.io client configuration.
#[derive(Debug, Clone)]
pub struct NewsDataConfig {
    /// API key, from `AppConfig::newsdata_api_key`.
    pub api_key: String,
    /// Base URL (default: https://newsdata.io/api/1).
    pub base_url: String,
    /// Request timeout (default: 10s).
    pub timeout: Duration,
    /// User-agent string (default: newsdesk/0.x).
    pub user_agent: String,
}

impl Default for NewsDataConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl NewsDataConfig {
    /// Build the client configuration from the application configuration.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, NewsDataError> {
        let api_key = config
            .require_newsdata_api_key()
            .map_err(|_| NewsDataError::MissingApiKey)?
            .to_string();

        Ok(Self {
            api_key,
            base_url: config.base_url.clone(),
            timeout: config.timeout(),
            user_agent: config.user_agent.clone(),
        })
    }

    /// The `/news` endpoint under `base_url`.
    pub fn endpoint(&self) -> Result<Url, NewsDataError> {
        let base = format!("{}/news", self.base_url.trim_end_matches('/'));
        Url::parse(&base).map_err(|e| NewsDataError::InvalidBaseUrl(format!("{}: {e}", self.base_url)))
    }
}

/// newsdata.io API client.
#[derive(Debug, Clone)]
pub struct NewsDataClient {
    http: reqwest::Client,
    config: NewsDataConfig,
    endpoint: Url,
}

impl NewsDataClient {
    /// Create a new client with the given configuration.
    pub fn new(config: NewsDataConfig) -> Result<Self, NewsDataError> {
        if config.api_key.is_empty() {
            return Err(NewsDataError::MissingApiKey);
        }

        let endpoint = config.endpoint()?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| NewsDataError::Network(Arc::new(e)))?;

        Ok(Self { http, config, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetch one page of news.
    ///
    /// Issues exactly one request. Non-success statuses are mapped to
    /// [`NewsDataError`] variants and returned unchanged to the caller.
    pub async fn fetch_page(&self, query: &NewsQuery) -> Result<NewsResponse, NewsDataError> {
        query.validate().map_err(|e| NewsDataError::InvalidQuery(e.to_string()))?;

        let start = Instant::now();
        let params = NewsRequest::new(&self.config.api_key, query);

        tracing::debug!(q = %query.q, country = %query.country, category = %query.category, page = query.page, "fetching news page");

        let http_response = self
            .http
            .get(self.endpoint.clone())
            .header(header::ACCEPT, "application/json")
            .header(header::USER_AGENT, &self.config.user_agent)
            .query(&params)
            .send()
            .await?;

        let status = http_response.status();
        tracing::debug!("news API response status: {}", status);

        if status == 401 || status == 403 {
            return Err(NewsDataError::Auth);
        }

        if status == 429 {
            return Err(NewsDataError::RateLimited);
        }

        if !status.is_success() {
            return Err(NewsDataError::HttpError { status: status.as_u16() });
        }

        let bytes = http_response.bytes().await?;
        let api_response: NewsDataApiResponse =
            serde_json::from_slice(&bytes).map_err(|e| NewsDataError::Parse(e.to_string()))?;

        let response = NewsResponse::from(api_response);
        tracing::debug!("news page fetched in {:?}, {} results", start.elapsed(), response.result_count());

        Ok(response)
    }
}

#[async_trait]
impl NewsSource for NewsDataClient {
    async fn fetch_page(&self, query: &NewsQuery) -> Result<NewsResponse, NewsDataError> {
        NewsDataClient::fetch_page(self, query).await
    }
}
