//! The workflow transition record reconciled by this crate.

use super::{MalformedWorkflowIdError, RoleId, StatusId, TrackerId, WorkflowId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Permission for a role to move a work item of one tracker from one
/// status to another.
///
/// The four fields form the natural key. Transitions are directed, so
/// `(a -> b)` and `(b -> a)` are distinct values.
///
/// Transitions serialize as their [`WorkflowId`] token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "WorkflowId", into = "WorkflowId")]
pub struct Transition {
    tracker_id: TrackerId,
    role_id: RoleId,
    old_status_id: StatusId,
    new_status_id: StatusId,
}

impl Transition {
    /// Creates a transition from its key fields.
    #[must_use]
    pub const fn new(
        tracker_id: TrackerId,
        role_id: RoleId,
        old_status_id: StatusId,
        new_status_id: StatusId,
    ) -> Self {
        Self {
            tracker_id,
            role_id,
            old_status_id,
            new_status_id,
        }
    }

    /// Returns the tracker this transition belongs to.
    #[must_use]
    pub const fn tracker_id(&self) -> TrackerId {
        self.tracker_id
    }

    /// Returns the role granted this transition.
    #[must_use]
    pub const fn role_id(&self) -> RoleId {
        self.role_id
    }

    /// Returns the status the work item moves from.
    #[must_use]
    pub const fn old_status_id(&self) -> StatusId {
        self.old_status_id
    }

    /// Returns the status the work item moves to.
    #[must_use]
    pub const fn new_status_id(&self) -> StatusId {
        self.new_status_id
    }

    /// Returns `true` when the transition starts and ends on the same status.
    #[must_use]
    pub fn is_self_transition(&self) -> bool {
        self.old_status_id == self.new_status_id
    }

    /// Returns the same permission in the opposite direction.
    #[must_use]
    pub const fn reversed(&self) -> Self {
        Self::new(
            self.tracker_id,
            self.role_id,
            self.new_status_id,
            self.old_status_id,
        )
    }

    /// Returns the identity token for this transition.
    #[must_use]
    pub fn workflow_id(&self) -> WorkflowId {
        WorkflowId::encode(self)
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "tracker {} role {}: {} -> {}",
            self.tracker_id, self.role_id, self.old_status_id, self.new_status_id
        )
    }
}

impl From<Transition> for WorkflowId {
    fn from(transition: Transition) -> Self {
        Self::encode(&transition)
    }
}

impl TryFrom<WorkflowId> for Transition {
    type Error = MalformedWorkflowIdError;

    fn try_from(id: WorkflowId) -> Result<Self, Self::Error> {
        id.decode()
    }
}
