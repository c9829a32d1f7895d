//! Provider ports for the status universe and applicable roles.

use crate::task_workflow::domain::{RoleId, StatusId, TrackerId};
use async_trait::async_trait;
use std::collections::BTreeSet;
use std::sync::Arc;
use thiserror::Error;

/// Result type for provider lookups.
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Supplies the statuses a tracker must be able to reach.
#[async_trait]
pub trait StatusUniverseProvider: Send + Sync {
    /// Returns the deduplicated status universe for `tracker_id`.
    async fn status_ids(&self, tracker_id: TrackerId) -> ProviderResult<BTreeSet<StatusId>>;
}

/// Supplies the roles applicable to a tracker.
#[async_trait]
pub trait RoleProvider: Send + Sync {
    /// Returns the roles applicable to `tracker_id`.
    async fn role_ids(&self, tracker_id: TrackerId) -> ProviderResult<BTreeSet<RoleId>>;
}

/// Errors returned by status and role providers.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    /// The plugin has no task tracker configured.
    #[error("backlogs plugin is not configured")]
    NotConfigured,

    /// The provider does not serve the requested tracker.
    #[error("tracker {0} is not managed by this provider")]
    UnknownTracker(TrackerId),

    /// Lookup failure in the backing source.
    #[error("provider lookup failed: {0}")]
    Lookup(Arc<dyn std::error::Error + Send + Sync>),
}

impl ProviderError {
    /// Wraps a lookup error.
    pub fn lookup(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Lookup(Arc::new(err))
    }
}
