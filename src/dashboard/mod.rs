//! Fetch → decode → publish pipeline.
//!
//! [`DashboardFetcher::fetch`] spawns one background request per call. When it
//! completes, exactly one [`FetchEvent`] is posted to the [`UiContext`]; the
//! [`UiLoop`] on the presentation side applies it to the [`DashboardStore`].
//!
//! Overlapping fetches are allowed. Every event carries the sequence number of
//! the call that produced it so the store's [`StalePolicy`] can decide whether
//! an out-of-order completion still counts.

use crate::api::DashboardSource;
use crate::error::FailureKind;
use crate::types::DashboardResponse;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

mod store;
mod ui_context;

pub use store::{Applied, DashboardStore, StalePolicy};
pub use ui_context::{ui_channel, UiContext, UiLoop};

/// Terminal result of one fetch.
#[derive(Debug)]
pub enum FetchOutcome {
    Success(Box<DashboardResponse>),
    Failure(FailureKind),
}

/// A fetch result tagged with the sequence number of the call that made it.
#[derive(Debug)]
pub struct FetchEvent {
    pub seq: u64,
    pub outcome: FetchOutcome,
}

/// Handle for one in-flight fetch.
#[derive(Debug)]
pub struct FetchTicket {
    pub seq: u64,
    handle: JoinHandle<()>,
}

impl FetchTicket {
    /// Wait until the fetch has posted its event.
    pub async fn finished(self) {
        if let Err(err) = self.handle.await {
            warn!(seq = self.seq, error = %err, "fetch task ended abnormally");
        }
    }
}

/// Issues dashboard fetches and posts their results to the UI context.
pub struct DashboardFetcher {
    source: Arc<dyn DashboardSource>,
    ui: UiContext,
    next_seq: AtomicU64,
}

impl DashboardFetcher {
    pub fn new(source: Arc<dyn DashboardSource>, ui: UiContext) -> Self {
        Self {
            source,
            ui,
            next_seq: AtomicU64::new(1),
        }
    }

    /// Start one fetch in the background. Must be called inside a tokio runtime.
    ///
    /// No retry: a failure is posted as-is and the previous snapshot stays.
    pub fn fetch(&self) -> FetchTicket {
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        let source = Arc::clone(&self.source);
        let ui = self.ui.clone();
        debug!(seq, "starting dashboard fetch");
        let handle = tokio::spawn(async move {
            let outcome = match source.fetch_dashboard().await {
                Ok(response) => FetchOutcome::Success(Box::new(response)),
                Err(err) => {
                    warn!(seq, kind = %err.kind(), error = %err, "dashboard fetch failed");
                    FetchOutcome::Failure(err.kind())
                }
            };
            ui.post(FetchEvent { seq, outcome });
        });
        FetchTicket { seq, handle }
    }
}
