// ABOUTME: Retrieves the documentation page over HTTP with a blocking reqwest client.
// ABOUTME: One GET, no retries; non-success statuses are fetch errors.

use std::time::Duration;

use url::Url;

use crate::error::ScrapeError;

/// Validates `url` as an absolute http(s) URL.
pub fn parse_url(url: &str) -> Result<Url, ScrapeError> {
    let parsed = Url::parse(url).map_err(|e| ScrapeError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(ScrapeError::InvalidUrl {
            url: url.to_string(),
            reason: format!("unsupported scheme {}", other),
        }),
    }
}

/// Builds the HTTP client used for the page fetch.
pub fn http_client(
    user_agent: &str,
    timeout: Option<Duration>,
) -> Result<reqwest::blocking::Client, reqwest::Error> {
    reqwest::blocking::Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .gzip(true)
        .brotli(true)
        .deflate(true)
        .build()
}

/// Fetches `url` and returns the body as text.
pub fn fetch_page(client: &reqwest::blocking::Client, url: &str) -> Result<String, ScrapeError> {
    let parsed = parse_url(url)?;
    tracing::debug!(%url, "fetching documentation page");

    let resp = client
        .get(parsed)
        .send()
        .and_then(|r| r.error_for_status())
        .map_err(|e| ScrapeError::fetch(url, e))?;
    let body = resp.text().map_err(|e| ScrapeError::fetch(url, e))?;

    tracing::debug!(%url, bytes = body.len(), "fetched documentation page");
    Ok(body)
}
