//! `PostgreSQL` adapters for workflow transition persistence.

mod models;
mod repository;
mod schema;

pub use repository::{PostgresTransitionStore, WorkflowPgPool};
