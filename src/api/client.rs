//! Reqwest-backed dashboard client.

use super::decode::decode_dashboard;
use super::transport;
use super::DashboardSource;
use crate::config::ApiConfig;
use crate::error::FetchError;
use crate::types::DashboardResponse;
use async_trait::async_trait;
use tracing::{debug, warn};

/// Client for the dashboard endpoint.
///
/// Each call issues exactly one request; there is no retry layer.
pub struct ApiClient {
    http: reqwest::Client,
    url: String,
    token: String,
}

impl ApiClient {
    /// Build a client from resolved API configuration.
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http: transport::build_http_client(config.timeout()),
            url: config.url.trim().to_string(),
            token: config.token.trim().to_string(),
        }
    }

    /// Fetch and decode one dashboard snapshot.
    pub async fn fetch(&self) -> Result<DashboardResponse, FetchError> {
        debug!(url = %self.url, "requesting dashboard");
        let response = transport::dashboard_request(&self.http, &self.url, &self.token)
            .send()
            .await
            .map_err(log_network_error)?;
        let status = response.status();
        if !status.is_success() {
            debug!(status = status.as_u16(), "dashboard endpoint returned non-success status");
        }
        let body = response.bytes().await.map_err(log_network_error)?;
        decode_dashboard(status.as_u16(), &body)
    }
}

fn log_network_error(err: reqwest::Error) -> FetchError {
    warn!(error = %err, "dashboard request failed");
    FetchError::Network(err)
}

#[async_trait]
impl DashboardSource for ApiClient {
    async fn fetch_dashboard(&self) -> Result<DashboardResponse, FetchError> {
        ApiClient::fetch(self).await
    }
}
