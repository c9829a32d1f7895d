//! Store port for persisted workflow transitions.

use crate::task_workflow::domain::{TrackerId, Transition};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for transition store operations.
pub type TransitionStoreResult<T> = Result<T, TransitionStoreError>;

/// Persistence contract for workflow transitions.
///
/// Implementations must reject a second record with the same 4-tuple key.
#[async_trait]
pub trait TransitionStore: Send + Sync {
    /// Returns every persisted transition belonging to `tracker_id`.
    ///
    /// Reflects the store state at call time.
    async fn find(&self, tracker_id: TrackerId) -> TransitionStoreResult<Vec<Transition>>;

    /// Persists a new transition.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionStoreError::Duplicate`] when the key already
    /// exists.
    async fn create(&self, transition: &Transition) -> TransitionStoreResult<()>;

    /// Removes a transition.
    ///
    /// Returns `false` when no matching record existed.
    async fn delete(&self, transition: &Transition) -> TransitionStoreResult<bool>;
}

/// Errors returned by transition store implementations.
#[derive(Debug, Clone, Error)]
pub enum TransitionStoreError {
    /// A transition with the same key is already persisted.
    #[error("duplicate workflow transition: {0}")]
    Duplicate(Transition),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TransitionStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
