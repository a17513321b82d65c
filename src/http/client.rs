//! Single-shot HTTP fetcher
//!
//! One GET per call, raw bytes back. Transport failures and non-success
//! statuses are returned to the caller as-is; nothing here retries.

use crate::error::{Error, Result};
use crate::types::StringMap;
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

// ============================================================================
// Fetcher Trait
// ============================================================================

/// The transport seam: one GET-style request, raw body bytes back
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Issue a single GET for `url` with `params` as query parameters
    async fn fetch(&self, url: &str, params: &StringMap) -> Result<Bytes>;
}

// ============================================================================
// Fetcher Config
// ============================================================================

/// Configuration for the HTTP fetcher
#[derive(Debug, Clone)]
pub struct HttpFetcherConfig {
    /// Request timeout
    pub timeout: Duration,
    /// Headers sent with every request
    pub default_headers: StringMap,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpFetcherConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            default_headers: StringMap::new(),
            user_agent: format!("trawl/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpFetcherConfig {
    /// Create a new config builder
    pub fn builder() -> HttpFetcherConfigBuilder {
        HttpFetcherConfigBuilder::default()
    }
}

/// Builder for the HTTP fetcher config
#[derive(Default)]
pub struct HttpFetcherConfigBuilder {
    config: HttpFetcherConfig,
}

impl HttpFetcherConfigBuilder {
    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpFetcherConfig {
        self.config
    }
}

// ============================================================================
// HTTP Fetcher
// ============================================================================

/// Reqwest-backed [`Fetcher`]
pub struct HttpFetcher {
    client: Client,
    config: HttpFetcherConfig,
}

impl HttpFetcher {
    /// Create a fetcher with default configuration
    pub fn new() -> Self {
        Self::with_config(HttpFetcherConfig::default())
    }

    /// Create a fetcher with custom configuration
    pub fn with_config(config: HttpFetcherConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .expect("Failed to build HTTP client");

        Self { client, config }
    }

    /// Get the underlying reqwest client
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// The fetcher's configuration
    pub fn config(&self) -> &HttpFetcherConfig {
        &self.config
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str, params: &StringMap) -> Result<Bytes> {
        let parsed = Url::parse(url)?;

        let mut req = self.client.get(parsed);
        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }
        if !params.is_empty() {
            req = req.query(params);
        }

        let response = req.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::http_status(status.as_u16(), body));
        }

        debug!("GET {} succeeded ({})", url, status);
        Ok(response.bytes().await?)
    }
}
