//! Task workflow reconciliation for backlogs.
//!
//! The task tracker must let every applicable role move a task between any
//! two configured task statuses, in both directions. This module keeps the
//! persisted workflow transitions for that tracker equal to the set the
//! configuration requires, inserting what is missing and deleting what is no
//! longer used. Transitions of other trackers are never touched. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
