//! HTTP fetcher implementation
//!
//! This module handles the single page request, including:
//! - Building an HTTP client with a proper user agent string
//! - Fetching the page body as raw bytes
//! - Promoting non-success status codes to errors

use crate::{Result, TallyError};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// User agent sent with the page request
///
/// Format: name/version
pub const USER_AGENT: &str = concat!("linktally/", env!("CARGO_PKG_VERSION"));

/// Builds an HTTP client with proper configuration
///
/// Redirects are followed with the default policy, so the body returned by
/// [`fetch_page`] is the one at the end of any redirect chain.
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(TallyError::Reqwest)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use linktally::fetch::build_http_client;
///
/// let client = build_http_client().unwrap();
/// ```
pub fn build_http_client() -> Result<Client> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()?;

    Ok(client)
}

/// Fetches a page and returns its body bytes
///
/// Redirects are followed by the client; any response with a non-success
/// status code is an error.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
///
/// # Returns
///
/// * `Ok(Vec<u8>)` - The raw body bytes
/// * `Err(TallyError::Http)` - Connection, timeout, or status error
pub async fn fetch_page(client: &Client, url: &Url) -> Result<Vec<u8>> {
    let response = client
        .get(url.clone())
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .map_err(|source| TallyError::Http {
            url: url.to_string(),
            source,
        })?;

    let body = response.bytes().await.map_err(|source| TallyError::Http {
        url: url.to_string(),
        source,
    })?;

    Ok(body.to_vec())
}
