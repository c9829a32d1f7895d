//! Status universe provider backed by the plugin settings.

use async_trait::async_trait;
use std::collections::BTreeSet;
use std::sync::{Arc, RwLock};

use crate::settings::BacklogsSettings;
use crate::task_workflow::{
    domain::{StatusId, TrackerId},
    ports::{ProviderError, ProviderResult, StatusUniverseProvider},
};

/// Settings shared between the configuration surface and the reconciler.
pub type SharedSettings = Arc<RwLock<BacklogsSettings>>;

/// Serves the union of default and per-project task statuses for the
/// configured task tracker.
#[derive(Debug, Clone)]
pub struct SettingsStatusUniverse {
    settings: SharedSettings,
}

impl SettingsStatusUniverse {
    /// Creates a provider reading from shared settings.
    #[must_use]
    pub const fn new(settings: SharedSettings) -> Self {
        Self { settings }
    }
}

#[async_trait]
impl StatusUniverseProvider for SettingsStatusUniverse {
    async fn status_ids(&self, tracker_id: TrackerId) -> ProviderResult<BTreeSet<StatusId>> {
        let settings = self
            .settings
            .read()
            .map_err(|err| ProviderError::lookup(std::io::Error::other(err.to_string())))?;
        let task_tracker = settings
            .task_tracker()
            .map_err(|_| ProviderError::NotConfigured)?;
        if task_tracker != tracker_id {
            return Err(ProviderError::UnknownTracker(tracker_id));
        }
        Ok(settings.all_task_status_ids())
    }
}
