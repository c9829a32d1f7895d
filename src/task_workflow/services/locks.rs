//! Per-tracker mutual exclusion for reconciliation runs.

use crate::task_workflow::domain::TrackerId;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

/// Error returned when the lock registry itself is unusable.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("tracker lock registry is poisoned")]
pub struct TrackerLockError;

/// Registry of one async mutex per tracker.
///
/// Runs against the same tracker are serialized; runs against different
/// trackers proceed independently.
#[derive(Debug, Clone, Default)]
pub struct TrackerLocks {
    locks: Arc<Mutex<HashMap<TrackerId, Arc<AsyncMutex<()>>>>>,
}

impl TrackerLocks {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for exclusive access to `tracker_id`.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerLockError`] when the registry mutex is poisoned.
    pub async fn acquire(
        &self,
        tracker_id: TrackerId,
    ) -> Result<OwnedMutexGuard<()>, TrackerLockError> {
        let lock = {
            let mut locks = self.locks.lock().map_err(|_| TrackerLockError)?;
            Arc::clone(locks.entry(tracker_id).or_default())
        };
        Ok(lock.lock_owned().await)
    }
}
