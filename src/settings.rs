//! Plugin settings for backlogs.
//!
//! Settings name the story trackers, the single task tracker, the default
//! task statuses and any per-project task status overrides. The task status
//! universe reconciled into workflows is the union of the defaults and every
//! override.
//!
//! Mutators return the [`TaskStatusChange`] the caller should hand to a
//! [`crate::task_workflow::services::WorkflowSyncTrigger`]; nothing is
//! synchronized implicitly.

use crate::task_workflow::domain::{ProjectId, StatusId, TaskStatusChange, TrackerId};
use cap_std::fs_utf8::Dir;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

/// Errors returned while loading or querying settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Story trackers or the task tracker are missing.
    #[error("backlogs plugin is not configured: story trackers and a task tracker are required")]
    NotConfigured,

    /// The settings document could not be read.
    #[error("failed to read settings file '{path}': {source}")]
    Read {
        /// Path relative to the settings directory.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The settings document is not valid JSON for [`BacklogsSettings`].
    #[error("invalid settings document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Backlogs plugin configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BacklogsSettings {
    story_trackers: BTreeSet<TrackerId>,
    task_tracker: Option<TrackerId>,
    default_task_statuses: BTreeSet<StatusId>,
    project_task_statuses: BTreeMap<ProjectId, BTreeSet<StatusId>>,
}

impl BacklogsSettings {
    /// Creates settings for the given trackers with no statuses.
    #[must_use]
    pub fn new(
        story_trackers: impl IntoIterator<Item = TrackerId>,
        task_tracker: TrackerId,
    ) -> Self {
        Self {
            story_trackers: story_trackers.into_iter().collect(),
            task_tracker: Some(task_tracker),
            ..Self::default()
        }
    }

    /// Parses settings from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Parse`] when the document is malformed.
    pub fn from_json_str(document: &str) -> SettingsResult<Self> {
        Ok(serde_json::from_str(document)?)
    }

    /// Loads settings from a JSON file inside `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Read`] when the file cannot be read and
    /// [`SettingsError::Parse`] when its content is malformed.
    pub fn load(dir: &Dir, path: &str) -> SettingsResult<Self> {
        let document = dir.read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_owned(),
            source,
        })?;
        Self::from_json_str(&document)
    }

    /// Returns `true` when story trackers and the task tracker are set.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.story_trackers.is_empty() && self.task_tracker.is_some()
    }

    /// Returns the task tracker.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::NotConfigured`] when the plugin is not
    /// configured.
    pub fn task_tracker(&self) -> SettingsResult<TrackerId> {
        match self.task_tracker {
            Some(tracker_id) if self.is_configured() => Ok(tracker_id),
            _ => Err(SettingsError::NotConfigured),
        }
    }

    /// Returns the story trackers.
    #[must_use]
    pub const fn story_trackers(&self) -> &BTreeSet<TrackerId> {
        &self.story_trackers
    }

    /// Returns the default task statuses.
    #[must_use]
    pub const fn default_task_statuses(&self) -> &BTreeSet<StatusId> {
        &self.default_task_statuses
    }

    /// Returns the task statuses a project overrides, if any.
    #[must_use]
    pub fn project_task_statuses(&self, project_id: ProjectId) -> Option<&BTreeSet<StatusId>> {
        self.project_task_statuses.get(&project_id)
    }

    /// Returns the task statuses in effect for a project.
    #[must_use]
    pub fn effective_task_statuses(&self, project_id: ProjectId) -> &BTreeSet<StatusId> {
        self.project_task_statuses(project_id)
            .unwrap_or(&self.default_task_statuses)
    }

    /// Returns the union of the default statuses and every project override.
    #[must_use]
    pub fn all_task_status_ids(&self) -> BTreeSet<StatusId> {
        self.project_task_statuses
            .values()
            .flatten()
            .chain(&self.default_task_statuses)
            .copied()
            .collect()
    }

    /// Replaces the default task statuses.
    ///
    /// Returns the change to report, or `None` when nothing changed.
    pub fn set_default_task_statuses(
        &mut self,
        status_ids: impl IntoIterator<Item = StatusId>,
    ) -> Option<TaskStatusChange> {
        let updated: BTreeSet<StatusId> = status_ids.into_iter().collect();
        if updated == self.default_task_statuses {
            return None;
        }
        self.default_task_statuses = updated;
        Some(TaskStatusChange::DefaultStatuses)
    }

    /// Overrides the task statuses of a project.
    ///
    /// Returns the change to report, or `None` when nothing changed.
    pub fn set_project_task_statuses(
        &mut self,
        project_id: ProjectId,
        status_ids: impl IntoIterator<Item = StatusId>,
    ) -> Option<TaskStatusChange> {
        let updated: BTreeSet<StatusId> = status_ids.into_iter().collect();
        if self.project_task_statuses.get(&project_id) == Some(&updated) {
            return None;
        }
        self.project_task_statuses.insert(project_id, updated);
        Some(TaskStatusChange::ProjectStatuses { project_id })
    }

    /// Removes a project's override so it falls back to the defaults.
    ///
    /// Returns the change to report, or `None` when no override existed.
    pub fn clear_project_task_statuses(
        &mut self,
        project_id: ProjectId,
    ) -> Option<TaskStatusChange> {
        self.project_task_statuses
            .remove(&project_id)
            .map(|_| TaskStatusChange::ProjectStatuses { project_id })
    }
}
