//! Handoff from fetch tasks to the task that owns the store.
//!
//! Fetches may complete on any runtime worker. They never touch the store
//! directly: they post a [`FetchEvent`] through a [`UiContext`], and the
//! [`UiLoop`] applies it on the presentation side.

use super::store::{Applied, DashboardStore};
use super::FetchEvent;
use tokio::sync::mpsc;
use tracing::debug;

/// Cloneable, `Send` handle for posting fetch results to the UI loop.
#[derive(Debug, Clone)]
pub struct UiContext {
    tx: mpsc::UnboundedSender<FetchEvent>,
}

impl UiContext {
    /// Post a completed fetch. A no-op once the UI loop is gone.
    pub fn post(&self, event: FetchEvent) {
        let seq = event.seq;
        if self.tx.send(event).is_err() {
            debug!(seq, "ui loop closed; dropping fetch result");
        }
    }
}

/// Owner of the [`DashboardStore`] and receiving end of the handoff.
#[derive(Debug)]
pub struct UiLoop {
    rx: mpsc::UnboundedReceiver<FetchEvent>,
    store: DashboardStore,
}

impl UiLoop {
    /// Wait for the next posted event and apply it.
    ///
    /// Returns `None` when every [`UiContext`] has been dropped and the queue
    /// is drained.
    pub async fn next_applied(&mut self) -> Option<Applied> {
        let event = self.rx.recv().await?;
        Some(self.store.apply(event))
    }

    /// Apply whatever is already queued without waiting.
    pub fn drain_ready(&mut self) -> Vec<Applied> {
        let mut applied = Vec::new();
        while let Ok(event) = self.rx.try_recv() {
            applied.push(self.store.apply(event));
        }
        applied
    }

    pub fn store(&self) -> &DashboardStore {
        &self.store
    }

    pub fn into_store(self) -> DashboardStore {
        self.store
    }
}

/// Create a connected context/loop pair around `store`.
pub fn ui_channel(store: DashboardStore) -> (UiContext, UiLoop) {
    let (tx, rx) = mpsc::unbounded_channel();
    (UiContext { tx }, UiLoop { rx, store })
}
