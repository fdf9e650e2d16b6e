//! HTTP client for AnimeFire pages
//!
//! This module provides the plain GET primitive the scraper is built on.
//! One request per call, no retry: transient-failure policy is left to the
//! caller.

use std::time::Duration;

use tracing::debug;

use crate::error::Result;

/// Default User-Agent mimicking a modern browser
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Default Accept-Language header for Brazilian Portuguese content
const DEFAULT_ACCEPT_LANGUAGE: &str = "pt-BR,pt;q=0.9,en;q=0.8";

/// Configuration for the AnimeFire HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// User-Agent header sent with every request
    pub user_agent: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 30,
        }
    }
}

/// HTTP client for AnimeFire pages
///
/// Sends browser-like headers so the site serves the regular markup, and
/// enforces a request timeout. Non-success statuses are reported as errors.
pub struct AnimeFireClient {
    /// Underlying HTTP client
    client: reqwest::Client,
}

impl AnimeFireClient {
    /// Create a new client with default configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    ///
    /// # Arguments
    /// * `config` - Client configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent)
            .default_headers({
                let mut headers = reqwest::header::HeaderMap::new();
                headers.insert(
                    reqwest::header::ACCEPT_LANGUAGE,
                    DEFAULT_ACCEPT_LANGUAGE.parse().unwrap(),
                );
                headers
            })
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client })
    }

    /// Fetch HTML content from an absolute URL
    ///
    /// The URL is dispatched as-is, without prior validation.
    ///
    /// # Arguments
    /// * `url` - Absolute URL of the page to fetch
    ///
    /// # Returns
    /// The response body as a string
    ///
    /// # Errors
    /// `AnimeFireError::Fetch` on any transport failure or non-success status
    pub async fn fetch(&self, url: &str) -> Result<String> {
        debug!(url = %url, "fetching page");

        let response = self.client.get(url).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;

        debug!(url = %url, bytes = body.len(), "page fetched");
        Ok(body)
    }
}
