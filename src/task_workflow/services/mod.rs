//! Application services for task workflow reconciliation.

mod locks;
mod reconciler;
mod trigger;

pub use locks::{TrackerLockError, TrackerLocks};
pub use reconciler::{
    StoreOperation, TaskWorkflowService, TaskWorkflowServiceError, TaskWorkflowServiceResult,
};
pub use trigger::{FlushOutcome, WorkflowSyncTrigger};
