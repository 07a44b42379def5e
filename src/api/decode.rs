//! Strict decoding of dashboard bodies.

use crate::error::FetchError;
use crate::types::DashboardResponse;
use tracing::{debug, warn};

/// Decode a response body into a [`DashboardResponse`].
///
/// `status` is only carried into the error for diagnostics; bodies are decoded
/// whatever the HTTP status was.
pub fn decode_dashboard(status: u16, body: &[u8]) -> Result<DashboardResponse, FetchError> {
    debug!(status, body = %String::from_utf8_lossy(body), "dashboard response body");
    serde_json::from_slice::<DashboardResponse>(body).map_err(|source| {
        warn!(status, error = %source, "failed to decode dashboard response");
        FetchError::Decode { status, source }
    })
}
