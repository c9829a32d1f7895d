//! Explicit triggering of workflow synchronization.
//!
//! Configuration mutations report a [`TaskStatusChange`] here. A caller
//! later flushes the trigger, which synchronizes each affected tracker once.

use super::reconciler::{TaskWorkflowService, TaskWorkflowServiceError};
use crate::task_workflow::{
    domain::{SyncReport, TaskStatusChange, TrackerId},
    ports::{RoleProvider, StatusUniverseProvider, TransitionStore},
};
use mockable::Clock;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{info, warn};

type PendingChanges = BTreeMap<TrackerId, BTreeSet<TaskStatusChange>>;

/// Result of flushing pending synchronizations.
#[derive(Debug, Default)]
pub struct FlushOutcome {
    /// Reports of trackers synchronized successfully.
    pub reports: Vec<SyncReport>,
    /// Trackers whose synchronization failed; they stay pending.
    pub failures: Vec<(TrackerId, TaskWorkflowServiceError)>,
}

impl FlushOutcome {
    /// Returns `true` when every pending tracker synchronized.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Queue of trackers whose task status configuration changed.
#[derive(Debug, Clone, Default)]
pub struct WorkflowSyncTrigger {
    pending: Arc<Mutex<PendingChanges>>,
}

impl WorkflowSyncTrigger {
    /// Creates a trigger with nothing pending.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `tracker_id` needs synchronizing because of `change`.
    pub fn notify(&self, tracker_id: TrackerId, change: TaskStatusChange) {
        info!(%tracker_id, %change, "task workflow synchronization requested");
        self.lock().entry(tracker_id).or_default().insert(change);
    }

    /// Returns the changes waiting per tracker.
    #[must_use]
    pub fn pending(&self) -> PendingChanges {
        self.lock().clone()
    }

    /// Returns `true` when `tracker_id` awaits synchronization.
    #[must_use]
    pub fn is_pending(&self, tracker_id: TrackerId) -> bool {
        self.lock().contains_key(&tracker_id)
    }

    /// Synchronizes every pending tracker once.
    ///
    /// A tracker leaves the queue only when its synchronization succeeds;
    /// failed trackers are re-queued with their changes.
    pub async fn flush<S, U, R, C>(
        &self,
        service: &TaskWorkflowService<S, U, R, C>,
    ) -> FlushOutcome
    where
        S: TransitionStore,
        U: StatusUniverseProvider,
        R: RoleProvider,
        C: Clock + Send + Sync,
    {
        let drained = std::mem::take(&mut *self.lock());
        let mut outcome = FlushOutcome::default();

        for (tracker_id, changes) in drained {
            match service.synchronize(tracker_id).await {
                Ok(report) => outcome.reports.push(report),
                Err(err) => {
                    warn!(
                        %tracker_id,
                        error = %err,
                        "task workflow synchronization failed, keeping it pending"
                    );
                    self.lock().entry(tracker_id).or_default().extend(changes);
                    outcome.failures.push((tracker_id, err));
                }
            }
        }
        outcome
    }

    fn lock(&self) -> MutexGuard<'_, PendingChanges> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
