//! The single published dashboard snapshot.

use super::{FetchEvent, FetchOutcome};
use crate::error::FailureKind;
use crate::types::DashboardResponse;
use tracing::{debug, info};

/// How the store treats a success that belongs to an older fetch than the one
/// currently shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StalePolicy {
    /// Apply every success in arrival order; the last one to arrive wins.
    #[default]
    LastWriteWins,
    /// Ignore completions whose sequence number is below the applied snapshot's.
    DiscardStale,
}

/// What [`DashboardStore::apply`] did with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The event's response replaced the snapshot.
    Published { seq: u64 },
    /// A stale completion was dropped under [`StalePolicy::DiscardStale`].
    Discarded { seq: u64, current: u64 },
    /// The fetch failed; the snapshot was left alone.
    Failed { seq: u64, kind: FailureKind },
}

/// State container owned by the presentation side.
///
/// Snapshots are replaced wholesale, never merged. Failures never touch the
/// snapshot.
#[derive(Debug, Default)]
pub struct DashboardStore {
    snapshot: Option<DashboardResponse>,
    applied_seq: Option<u64>,
    last_failure: Option<FailureKind>,
    policy: StalePolicy,
}

impl DashboardStore {
    pub fn new(policy: StalePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn snapshot(&self) -> Option<&DashboardResponse> {
        self.snapshot.as_ref()
    }

    /// Sequence number of the fetch that produced the current snapshot.
    pub fn applied_seq(&self) -> Option<u64> {
        self.applied_seq
    }

    pub fn last_failure(&self) -> Option<FailureKind> {
        self.last_failure
    }

    pub fn policy(&self) -> StalePolicy {
        self.policy
    }

    /// Apply one fetch completion. This is the only way the snapshot changes.
    pub fn apply(&mut self, event: FetchEvent) -> Applied {
        let FetchEvent { seq, outcome } = event;
        match outcome {
            FetchOutcome::Failure(kind) => {
                if let Some(current) = self.newer_applied(seq) {
                    debug!(seq, current, %kind, "discarding stale fetch failure");
                    return Applied::Discarded { seq, current };
                }
                debug!(seq, %kind, "fetch failed; keeping current snapshot");
                self.last_failure = Some(kind);
                Applied::Failed { seq, kind }
            }
            FetchOutcome::Success(response) => {
                if let Some(current) = self.newer_applied(seq) {
                    debug!(seq, current, "discarding stale dashboard response");
                    return Applied::Discarded { seq, current };
                }
                info!(
                    seq,
                    total_links = response.total_links,
                    total_clicks = response.total_clicks,
                    "published dashboard snapshot"
                );
                self.snapshot = Some(*response);
                self.applied_seq = Some(seq);
                self.last_failure = None;
                Applied::Published { seq }
            }
        }
    }

    /// Under [`StalePolicy::DiscardStale`], the applied sequence if it is newer
    /// than `seq`.
    fn newer_applied(&self, seq: u64) -> Option<u64> {
        match self.policy {
            StalePolicy::LastWriteWins => None,
            StalePolicy::DiscardStale => self.applied_seq.filter(|current| *current > seq),
        }
    }
}
