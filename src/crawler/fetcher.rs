//! HTTP fetcher for the archive crawl
//!
//! One shared client, GET-only, browser-like default headers. There is no
//! retry layer: a transport failure or non-success status fails the whole
//! crawl, which the host surfaces as a hard error.

use crate::{Result, SourceError};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use reqwest::Client;
use std::time::Duration;

const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/120.0.0.0 Safari/537.36";

/// Builds the shared HTTP client with the source's default headers
pub fn build_http_client() -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static(
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        ),
    );
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));

    let client = Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()?;

    Ok(client)
}

/// Fetches a URL and returns the response body as HTML text.
///
/// Blocks the crawl until the response arrives; the next fetch never starts
/// before this one completes. Non-success statuses are errors.
pub async fn fetch_html(client: &Client, url: &str) -> Result<String> {
    tracing::debug!("GET {}", url);

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| SourceError::Http {
            url: url.to_string(),
            source,
        })?;

    let response = response
        .error_for_status()
        .map_err(|source| SourceError::Http {
            url: url.to_string(),
            source,
        })?;

    response.text().await.map_err(|source| SourceError::Http {
        url: url.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_client() {
        assert!(build_http_client().is_ok());
    }
}
