//! In-memory transition store for tests and embedding.

use async_trait::async_trait;
use std::collections::BTreeSet;
use std::sync::{Arc, RwLock};

use crate::task_workflow::{
    domain::{TrackerId, Transition},
    ports::{TransitionStore, TransitionStoreError, TransitionStoreResult},
};

/// Thread-safe in-memory transition store.
///
/// The key set doubles as the uniqueness constraint on the 4-tuple.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTransitionStore {
    transitions: Arc<RwLock<BTreeSet<Transition>>>,
}

impl InMemoryTransitionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `transitions`.
    #[must_use]
    pub fn with_transitions(transitions: impl IntoIterator<Item = Transition>) -> Self {
        Self {
            transitions: Arc::new(RwLock::new(transitions.into_iter().collect())),
        }
    }

    /// Returns every stored transition across all trackers.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionStoreError::Persistence`] when the lock is
    /// poisoned.
    pub fn snapshot(&self) -> TransitionStoreResult<BTreeSet<Transition>> {
        let transitions = self.transitions.read().map_err(|err| {
            TransitionStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(transitions.clone())
    }
}

#[async_trait]
impl TransitionStore for InMemoryTransitionStore {
    async fn find(&self, tracker_id: TrackerId) -> TransitionStoreResult<Vec<Transition>> {
        let transitions = self.transitions.read().map_err(|err| {
            TransitionStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(transitions
            .iter()
            .filter(|transition| transition.tracker_id() == tracker_id)
            .copied()
            .collect())
    }

    async fn create(&self, transition: &Transition) -> TransitionStoreResult<()> {
        let mut transitions = self.transitions.write().map_err(|err| {
            TransitionStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if !transitions.insert(*transition) {
            return Err(TransitionStoreError::Duplicate(*transition));
        }
        Ok(())
    }

    async fn delete(&self, transition: &Transition) -> TransitionStoreResult<bool> {
        let mut transitions = self.transitions.write().map_err(|err| {
            TransitionStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(transitions.remove(transition))
    }
}
