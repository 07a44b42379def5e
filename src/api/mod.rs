//! HTTP access to the dashboard endpoint.
//!
//! - `client`: the reqwest-backed [`ApiClient`]
//! - `transport`: HTTP client construction and request headers
//! - `decode`: strict body-to-model decoding

use crate::error::FetchError;
use crate::types::DashboardResponse;
use async_trait::async_trait;

mod client;
mod decode;
mod transport;

pub use client::ApiClient;
pub use decode::decode_dashboard;

/// Anything that can produce one dashboard snapshot per call.
///
/// The fetcher only depends on this trait, so tests and alternate front ends
/// can supply deterministic data without network calls.
#[async_trait]
pub trait DashboardSource: Send + Sync {
    async fn fetch_dashboard(&self) -> Result<DashboardResponse, FetchError>;
}
