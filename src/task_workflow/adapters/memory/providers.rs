//! Fixed-value status and role providers.

use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, RwLock};

use crate::task_workflow::{
    domain::{RoleId, StatusId, TrackerId},
    ports::{ProviderError, ProviderResult, RoleProvider, StatusUniverseProvider},
};

/// Role provider backed by an editable per-tracker role table.
#[derive(Debug, Clone, Default)]
pub struct StaticRoleProvider {
    roles: Arc<RwLock<BTreeMap<TrackerId, BTreeSet<RoleId>>>>,
}

impl StaticRoleProvider {
    /// Creates a provider with no roles for any tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a provider serving `role_ids` for `tracker_id`.
    #[must_use]
    pub fn for_tracker(tracker_id: TrackerId, role_ids: impl IntoIterator<Item = RoleId>) -> Self {
        let provider = Self::new();
        provider.replace(tracker_id, role_ids);
        provider
    }

    /// Replaces the roles served for `tracker_id`.
    pub fn replace(&self, tracker_id: TrackerId, role_ids: impl IntoIterator<Item = RoleId>) {
        let mut roles = self
            .roles
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        roles.insert(tracker_id, role_ids.into_iter().collect());
    }
}

#[async_trait]
impl RoleProvider for StaticRoleProvider {
    async fn role_ids(&self, tracker_id: TrackerId) -> ProviderResult<BTreeSet<RoleId>> {
        let roles = self
            .roles
            .read()
            .map_err(|err| ProviderError::lookup(std::io::Error::other(err.to_string())))?;
        roles
            .get(&tracker_id)
            .cloned()
            .ok_or(ProviderError::UnknownTracker(tracker_id))
    }
}

/// Status universe provider backed by an editable per-tracker table.
#[derive(Debug, Clone, Default)]
pub struct StaticStatusUniverse {
    statuses: Arc<RwLock<BTreeMap<TrackerId, BTreeSet<StatusId>>>>,
}

impl StaticStatusUniverse {
    /// Creates a provider with no statuses for any tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a provider serving `status_ids` for `tracker_id`.
    #[must_use]
    pub fn for_tracker(
        tracker_id: TrackerId,
        status_ids: impl IntoIterator<Item = StatusId>,
    ) -> Self {
        let provider = Self::new();
        provider.replace(tracker_id, status_ids);
        provider
    }

    /// Replaces the status universe served for `tracker_id`.
    pub fn replace(&self, tracker_id: TrackerId, status_ids: impl IntoIterator<Item = StatusId>) {
        let mut statuses = self
            .statuses
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        statuses.insert(tracker_id, status_ids.into_iter().collect());
    }
}

#[async_trait]
impl StatusUniverseProvider for StaticStatusUniverse {
    async fn status_ids(&self, tracker_id: TrackerId) -> ProviderResult<BTreeSet<StatusId>> {
        let statuses = self
            .statuses
            .read()
            .map_err(|err| ProviderError::lookup(std::io::Error::other(err.to_string())))?;
        statuses
            .get(&tracker_id)
            .cloned()
            .ok_or(ProviderError::UnknownTracker(tracker_id))
    }
}
