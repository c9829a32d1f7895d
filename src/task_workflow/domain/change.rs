//! Configuration change notifications that require reconciliation.

use super::ProjectId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A mutation of the task status configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TaskStatusChange {
    /// The default task statuses were edited.
    DefaultStatuses,
    /// A project overrode or reset its task statuses.
    ProjectStatuses {
        /// The project whose statuses changed.
        project_id: ProjectId,
    },
}

impl fmt::Display for TaskStatusChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DefaultStatuses => f.write_str("default task statuses changed"),
            Self::ProjectStatuses { project_id } => {
                write!(f, "task statuses of project {project_id} changed")
            }
        }
    }
}
