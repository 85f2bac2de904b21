//! Article retrieval from URLs and local files.
//!
//! [`HttpSource`] is the production [`ArticleSource`]: `http://` and
//! `https://` inputs are fetched over the network, anything else is read as
//! a local HTML file. The page is then reduced to its title and body with
//! [`extract_article`].

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::extract::{DEFAULT_CONTENT_SELECTOR, ExtractedArticle, extract_article};
use crate::source::ArticleSource;
use crate::{LexiscoreError, Result};

/// HTTP client and extraction configuration.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// Custom User-Agent string.
    pub user_agent: String,
    /// CSS selector of the element holding the article body.
    pub content_selector: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: 30,
            user_agent: "Mozilla/5.0 (compatible; Lexiscore/1.0)".to_string(),
            content_selector: DEFAULT_CONTENT_SELECTOR.to_string(),
        }
    }
}

/// Fetches HTML content from a URL.
///
/// Follows redirects and respects the configured timeout. Non-success
/// status codes are errors.
pub async fn fetch_url(client: &Client, url: &str, config: &FetchConfig) -> Result<String> {
    let parsed_url = Url::parse(url).map_err(|e| LexiscoreError::InvalidUrl(e.to_string()))?;

    if !matches!(parsed_url.scheme(), "http" | "https") {
        return Err(LexiscoreError::InvalidUrl(format!(
            "unsupported scheme `{}`, expected http or https",
            parsed_url.scheme()
        )));
    }

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
                LexiscoreError::Timeout { timeout: config.timeout }
            } else {
                LexiscoreError::HttpError(e)
            }
        })?
        .error_for_status()?;

    let content = response.text().await?;

    Ok(content)
}

/// Reads HTML content from a local file.
pub fn fetch_file(path: &str) -> Result<String> {
    let path_buf = PathBuf::from(path);

    if !path_buf.exists() {
        Err(LexiscoreError::FileNotFound(path_buf))
    } else {
        fs::read_to_string(&path_buf).map_err(LexiscoreError::from)
    }
}

fn is_remote(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}

/// Fetches articles over HTTP, or from disk for non-URL inputs.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    config: FetchConfig,
}

impl HttpSource {
    /// Builds the HTTP client once for the whole batch.
    pub fn new(config: FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()
            .map_err(LexiscoreError::HttpError)?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }
}

impl ArticleSource for HttpSource {
    async fn fetch(&self, url: &str) -> Result<ExtractedArticle> {
        let html = if is_remote(url) {
            fetch_url(&self.client, url, &self.config).await?
        } else {
            fetch_file(url).map_err(|e| LexiscoreError::PageUnavailable { location: url.to_string(), reason: e.to_string() })?
        };

        extract_article(&html, &self.config.content_selector)
    }
}
