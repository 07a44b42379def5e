//! linkboard: a terminal client for a link-shortener analytics dashboard.
//!
//! One authenticated GET fetches the dashboard, the body is decoded strictly
//! into typed records, and the result is handed to a presentation-side store
//! that holds the single current snapshot.
//!
//! # Quick start
//!
//! ```no_run
//! use linkboard::api::ApiClient;
//! use linkboard::config::load_config;
//! use linkboard::dashboard::{ui_channel, DashboardFetcher, DashboardStore};
//! use std::sync::Arc;
//!
//! # async fn example() {
//! let config = load_config(None).unwrap();
//! let (ui, mut ui_loop) = ui_channel(DashboardStore::new(config.fetch.stale_policy()));
//! let fetcher = DashboardFetcher::new(Arc::new(ApiClient::new(&config.api)), ui);
//! fetcher.fetch();
//! let applied = ui_loop.next_applied().await;
//! println!("{applied:?}: {:?}", ui_loop.store().snapshot().map(|s| s.total_links));
//! # }
//! ```

pub mod api;
pub mod build_info;
pub mod color;
pub mod config;
pub mod dashboard;
pub mod error;
#[cfg(test)]
pub mod testsupport;
pub mod types;
pub mod ui;
