//! Service layer reconciling persisted workflows with the required set.

use super::locks::{TrackerLockError, TrackerLocks};
use crate::task_workflow::{
    domain::{
        RoleId, StatusId, SyncPlan, SyncReport, TrackerId, Transition, required_transitions,
    },
    ports::{
        ProviderError, RoleProvider, StatusUniverseProvider, TransitionStore,
        TransitionStoreError,
    },
};
use mockable::Clock;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Store operation that failed during reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOperation {
    /// Persisting a missing transition.
    Create,
    /// Removing an unused transition.
    Delete,
}

impl fmt::Display for StoreOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create => f.write_str("create"),
            Self::Delete => f.write_str("delete"),
        }
    }
}

/// Service-level errors for workflow reconciliation.
#[derive(Debug, Error)]
pub enum TaskWorkflowServiceError {
    /// The status universe or role set could not be resolved.
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// Existing transitions could not be read.
    #[error("failed to read existing workflows: {0}")]
    Store(#[source] TransitionStoreError),

    /// The store rejected a change. The run stopped at this transition.
    #[error("failed to {operation} workflow transition ({transition}): {source}")]
    Persistence {
        /// The operation that failed.
        operation: StoreOperation,
        /// The offending transition.
        transition: Transition,
        /// The store error.
        source: TransitionStoreError,
        /// Changes applied before the failure.
        applied: Box<SyncReport>,
    },

    /// The tracker lock could not be taken.
    #[error(transparent)]
    Lock(#[from] TrackerLockError),
}

/// Result type for workflow reconciliation.
pub type TaskWorkflowServiceResult<T> = Result<T, TaskWorkflowServiceError>;

/// Reconciles the persisted task tracker workflows with configuration.
///
/// Deletes are applied before inserts. The first store failure aborts the
/// run; re-running converges because every run recomputes the full diff.
///
/// Runs for one tracker are serialized only among services sharing the same
/// [`TrackerLocks`]. Clones share their locks; independently built services
/// over the same store must be given a common registry through
/// [`TaskWorkflowService::with_locks`].
#[derive(Clone)]
pub struct TaskWorkflowService<S, U, R, C>
where
    S: TransitionStore,
    U: StatusUniverseProvider,
    R: RoleProvider,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    statuses: Arc<U>,
    roles: Arc<R>,
    clock: Arc<C>,
    locks: TrackerLocks,
}

impl<S, U, R, C> TaskWorkflowService<S, U, R, C>
where
    S: TransitionStore,
    U: StatusUniverseProvider,
    R: RoleProvider,
    C: Clock + Send + Sync,
{
    /// Creates a new reconciliation service with its own lock registry.
    #[must_use]
    pub fn new(store: Arc<S>, statuses: Arc<U>, roles: Arc<R>, clock: Arc<C>) -> Self {
        Self::with_locks(store, statuses, roles, clock, TrackerLocks::new())
    }

    /// Creates a reconciliation service that serializes runs through `locks`.
    #[must_use]
    pub const fn with_locks(
        store: Arc<S>,
        statuses: Arc<U>,
        roles: Arc<R>,
        clock: Arc<C>,
        locks: TrackerLocks,
    ) -> Self {
        Self {
            store,
            statuses,
            roles,
            clock,
            locks,
        }
    }

    /// Synchronizes `tracker_id` against the current statuses and roles.
    ///
    /// # Errors
    ///
    /// Returns [`TaskWorkflowServiceError`] when a provider or the store
    /// fails. A [`TaskWorkflowServiceError::Persistence`] error carries the
    /// changes applied before the failure.
    pub async fn synchronize(&self, tracker_id: TrackerId) -> TaskWorkflowServiceResult<SyncReport> {
        let _guard = self.locks.acquire(tracker_id).await?;
        let status_ids = self.statuses.status_ids(tracker_id).await?;
        let role_ids = self.roles.role_ids(tracker_id).await?;
        self.reconcile(tracker_id, &status_ids, &role_ids).await
    }

    /// Synchronizes `tracker_id` against explicit statuses and roles.
    ///
    /// # Errors
    ///
    /// Returns [`TaskWorkflowServiceError`] when the store fails.
    pub async fn synchronize_with(
        &self,
        tracker_id: TrackerId,
        status_ids: &BTreeSet<StatusId>,
        role_ids: &BTreeSet<RoleId>,
    ) -> TaskWorkflowServiceResult<SyncReport> {
        let _guard = self.locks.acquire(tracker_id).await?;
        self.reconcile(tracker_id, status_ids, role_ids).await
    }

    /// Computes the changes a synchronization would apply, without applying
    /// them.
    ///
    /// # Errors
    ///
    /// Returns [`TaskWorkflowServiceError`] when a provider or the store
    /// fails.
    pub async fn pending_changes(&self, tracker_id: TrackerId) -> TaskWorkflowServiceResult<SyncPlan> {
        let status_ids = self.statuses.status_ids(tracker_id).await?;
        let role_ids = self.roles.role_ids(tracker_id).await?;
        let required = required_transitions(tracker_id, &status_ids, &role_ids);
        let existing = self.fetch_existing(tracker_id).await?;
        Ok(SyncPlan::diff(&required, &existing))
    }

    /// Returns every persisted transition for `tracker_id`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskWorkflowServiceError::Store`] when the read fails.
    pub async fn fetch_existing(
        &self,
        tracker_id: TrackerId,
    ) -> TaskWorkflowServiceResult<BTreeSet<Transition>> {
        let existing = self
            .store
            .find(tracker_id)
            .await
            .map_err(TaskWorkflowServiceError::Store)?;
        Ok(existing.into_iter().collect())
    }

    async fn reconcile(
        &self,
        tracker_id: TrackerId,
        status_ids: &BTreeSet<StatusId>,
        role_ids: &BTreeSet<RoleId>,
    ) -> TaskWorkflowServiceResult<SyncReport> {
        let required = required_transitions(tracker_id, status_ids, role_ids);
        let existing = self.fetch_existing(tracker_id).await?;
        let plan = SyncPlan::diff(&required, &existing);
        let mut report = SyncReport::begin(tracker_id, &*self.clock);

        info!(
            %tracker_id,
            run_id = %report.run_id(),
            required = required.len(),
            existing = existing.len(),
            to_insert = plan.to_insert().len(),
            to_delete = plan.to_delete().len(),
            "synchronizing task workflows"
        );

        for transition in plan.to_delete() {
            match self.store.delete(transition).await {
                Ok(true) => {
                    debug!(workflow_id = %transition.workflow_id(), "deleted unused workflow");
                    report.record_deleted(*transition);
                }
                Ok(false) => {
                    warn!(
                        workflow_id = %transition.workflow_id(),
                        "unused workflow already removed"
                    );
                }
                Err(source) => {
                    return Err(persistence_failure(
                        StoreOperation::Delete,
                        *transition,
                        source,
                        report,
                    ));
                }
            }
        }

        for transition in plan.to_insert() {
            if let Err(source) = self.store.create(transition).await {
                return Err(persistence_failure(
                    StoreOperation::Create,
                    *transition,
                    source,
                    report,
                ));
            }
            debug!(workflow_id = %transition.workflow_id(), "created missing workflow");
            report.record_inserted(*transition);
        }

        info!(
            %tracker_id,
            run_id = %report.run_id(),
            inserted = report.inserted().len(),
            deleted = report.deleted().len(),
            "task workflows synchronized"
        );
        Ok(report)
    }
}

fn persistence_failure(
    operation: StoreOperation,
    transition: Transition,
    source: TransitionStoreError,
    applied: SyncReport,
) -> TaskWorkflowServiceError {
    warn!(
        %operation,
        workflow_id = %transition.workflow_id(),
        error = %source,
        "workflow synchronization aborted"
    );
    TaskWorkflowServiceError::Persistence {
        operation,
        transition,
        source,
        applied: Box::new(applied),
    }
}
