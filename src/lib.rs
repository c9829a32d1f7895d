//! Backlogs: agile backlog support for a host project tracker.
//!
//! This crate holds the engine that keeps the task tracker's workflow
//! transitions in step with the configured task statuses and roles.
//!
//! # Architecture
//!
//! Backlogs follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, settings, etc.)
//!
//! # Modules
//!
//! - [`settings`]: Plugin configuration and task status changes
//! - [`task_workflow`]: Workflow transition reconciliation for the task tracker

pub mod settings;
pub mod task_workflow;
