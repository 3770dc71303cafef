//! Page fetching for article extraction.
//!
//! This module provides the HTTP GET side of article mode: retrieving the
//! HTML of a source article before title/body extraction.

use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::{PostcraftError, Result};

/// HTTP client configuration for fetching article pages.
///
/// This struct controls timeout and user agent settings for HTTP requests.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// Custom User-Agent string.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: 30,
            user_agent: "Mozilla/5.0 (compatible; Postcraft/0.1; +https://github.com/stormlightlabs/postcraft)"
                .to_string(),
        }
    }
}

/// Fetches HTML content from a URL.
///
/// This function performs an HTTP GET request and returns the response body as text.
/// It follows redirects, respects the configured timeout, and uses a browser-like
/// User-Agent for better compatibility.
pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<String> {
    let parsed_url = Url::parse(url).map_err(|e| PostcraftError::InvalidUrl(e.to_string()))?;

    if parsed_url.scheme().is_empty() {
        return Err(PostcraftError::InvalidUrl(
            "URL must include a scheme (http:// or https://)".to_string(),
        ));
    }

    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()
        .map_err(PostcraftError::Http)?;

    let response = client
        .get(parsed_url)
        .header("User-Agent", &config.user_agent)
        .header(
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        )
        .header("Accept-Language", "en-US,en;q=0.9")
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                PostcraftError::Timeout { timeout: config.timeout }
            } else {
                PostcraftError::Http(e)
            }
        })?;

    let content = response.text().await?;

    Ok(content)
}
