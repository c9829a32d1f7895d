//! Diesel row models for workflow transition persistence.

use super::schema::workflows;
use crate::task_workflow::{
    domain::{RoleId, StatusId, TrackerId, Transition},
    ports::{TransitionStoreError, TransitionStoreResult},
};
use diesel::prelude::*;

/// Query result row for workflow records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = workflows)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct WorkflowRow {
    /// Tracker identifier.
    pub tracker_id: i32,
    /// Source status identifier.
    pub old_status_id: i32,
    /// Target status identifier.
    pub new_status_id: i32,
    /// Role identifier.
    pub role_id: i32,
}

/// Insert model for workflow records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Insertable)]
#[diesel(table_name = workflows)]
pub struct NewWorkflowRow {
    /// Tracker identifier.
    pub tracker_id: i32,
    /// Source status identifier.
    pub old_status_id: i32,
    /// Target status identifier.
    pub new_status_id: i32,
    /// Role identifier.
    pub role_id: i32,
}

impl NewWorkflowRow {
    /// Converts a transition into column values.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionStoreError::Persistence`] when an identifier does
    /// not fit the `INTEGER` columns.
    pub fn from_transition(transition: &Transition) -> TransitionStoreResult<Self> {
        Ok(Self {
            tracker_id: to_column(transition.tracker_id().value())?,
            old_status_id: to_column(transition.old_status_id().value())?,
            new_status_id: to_column(transition.new_status_id().value())?,
            role_id: to_column(transition.role_id().value())?,
        })
    }
}

impl WorkflowRow {
    /// Converts a persisted row into a transition.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionStoreError::Persistence`] when a column holds a
    /// negative identifier.
    pub fn into_transition(self) -> TransitionStoreResult<Transition> {
        Ok(Transition::new(
            TrackerId::new(from_column(self.tracker_id)?),
            RoleId::new(from_column(self.role_id)?),
            StatusId::new(from_column(self.old_status_id)?),
            StatusId::new(from_column(self.new_status_id)?),
        ))
    }
}

/// Converts a host identifier to its column representation.
pub(super) fn to_column(value: u32) -> TransitionStoreResult<i32> {
    i32::try_from(value).map_err(TransitionStoreError::persistence)
}

fn from_column(value: i32) -> TransitionStoreResult<u32> {
    u32::try_from(value).map_err(TransitionStoreError::persistence)
}
