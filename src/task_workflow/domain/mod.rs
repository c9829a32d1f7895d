//! Domain model for task workflow reconciliation.
//!
//! Everything here is pure: transition records, their identity tokens, the
//! combinatorial generation of required transitions, and the diff against
//! what is persisted. Persistence and configuration live behind ports.

mod change;
mod error;
mod identity;
mod ids;
mod plan;
mod report;
mod required;
mod transition;

pub use change::TaskStatusChange;
pub use error::MalformedWorkflowIdError;
pub use identity::WorkflowId;
pub use ids::{ProjectId, RoleId, StatusId, TrackerId};
pub use plan::SyncPlan;
pub use report::{SyncReport, SyncRunId};
pub use required::required_transitions;
pub use transition::Transition;
