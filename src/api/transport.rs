//! HTTP client construction and request assembly.

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use std::time::Duration;

const JSON_MEDIA_TYPE: &str = "application/json";

/// Build an HTTP client, applying `timeout` only when one is configured.
pub(super) fn build_http_client(timeout: Option<Duration>) -> reqwest::Client {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    // Fall back to reqwest defaults if builder creation fails for any reason.
    builder.build().unwrap_or_else(|_| reqwest::Client::new())
}

/// Assemble the dashboard GET with JSON and bearer headers.
pub(super) fn dashboard_request(
    http: &reqwest::Client,
    url: &str,
    token: &str,
) -> reqwest::RequestBuilder {
    http.get(url)
        .header(CONTENT_TYPE, JSON_MEDIA_TYPE)
        .header(ACCEPT, JSON_MEDIA_TYPE)
        .header(AUTHORIZATION, format!("Bearer {token}"))
}
