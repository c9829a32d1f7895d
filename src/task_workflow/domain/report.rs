//! Outcome of a reconciliation run.

use super::{TrackerId, Transition};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a single reconciliation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SyncRunId(Uuid);

impl SyncRunId {
    /// Creates a new random run identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for SyncRunId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SyncRunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Transitions actually inserted and deleted by one reconciliation run.
///
/// A delete that found the record already gone is not listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncReport {
    run_id: SyncRunId,
    tracker_id: TrackerId,
    inserted: BTreeSet<Transition>,
    deleted: BTreeSet<Transition>,
    synchronized_at: DateTime<Utc>,
}

impl SyncReport {
    /// Starts an empty report for a run against `tracker_id`.
    #[must_use]
    pub fn begin(tracker_id: TrackerId, clock: &impl Clock) -> Self {
        Self {
            run_id: SyncRunId::new(),
            tracker_id,
            inserted: BTreeSet::new(),
            deleted: BTreeSet::new(),
            synchronized_at: clock.utc(),
        }
    }

    /// Records a transition that was created in the store.
    pub fn record_inserted(&mut self, transition: Transition) {
        self.inserted.insert(transition);
    }

    /// Records a transition that was removed from the store.
    pub fn record_deleted(&mut self, transition: Transition) {
        self.deleted.insert(transition);
    }

    /// Returns the run identifier.
    #[must_use]
    pub const fn run_id(&self) -> SyncRunId {
        self.run_id
    }

    /// Returns the reconciled tracker.
    #[must_use]
    pub const fn tracker_id(&self) -> TrackerId {
        self.tracker_id
    }

    /// Returns the inserted transitions.
    #[must_use]
    pub const fn inserted(&self) -> &BTreeSet<Transition> {
        &self.inserted
    }

    /// Returns the deleted transitions.
    #[must_use]
    pub const fn deleted(&self) -> &BTreeSet<Transition> {
        &self.deleted
    }

    /// Returns when the run started.
    #[must_use]
    pub const fn synchronized_at(&self) -> DateTime<Utc> {
        self.synchronized_at
    }

    /// Returns `true` when the run changed nothing.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.inserted.is_empty() && self.deleted.is_empty()
    }
}
