//! Shared test helpers for `PostgreSQL` integration tests.

pub use super::cluster::{BoxError, PostgresCluster, postgres_cluster};
use super::cluster::{ManagedCluster, TemporaryDatabase};
use backlogs::task_workflow::{
    adapters::postgres::{PostgresTransitionStore, WorkflowPgPool},
    domain::{RoleId, StatusId, TrackerId, Transition},
};
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use rstest::fixture;
use tokio::runtime::Runtime;
use uuid::Uuid;

/// SQL creating the `workflows` table and its uniqueness index.
pub const CREATE_WORKFLOWS_SQL: &str =
    include_str!("../../migrations/2026-10-16-000000_create_workflows/up.sql");

/// Template database name for pre-migrated schema.
pub const TEMPLATE_DB: &str = "backlogs_test_template";

/// Tracker identifier used as the task tracker in tests.
pub const TASK_TRACKER: TrackerId = TrackerId::new(4);

/// Builds a multi-threaded runtime for driving async store calls.
///
/// # Errors
///
/// Returns an error if the runtime cannot be built.
pub fn test_runtime() -> Result<Runtime, BoxError> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|err| Box::new(err) as BoxError)
}

/// Ensures the template database exists with the schema applied.
///
/// # Errors
///
/// Returns an error if template creation or migration fails.
pub fn ensure_template(cluster: &ManagedCluster) -> Result<(), BoxError> {
    let connection = cluster.connection();
    cluster.ensure_template_exists(TEMPLATE_DB, move |db_name| {
        apply_migrations(&connection.database_url(db_name))
    })
}

fn apply_migrations(url: &str) -> Result<(), BoxError> {
    let mut conn = PgConnection::establish(url).map_err(|err| Box::new(err) as BoxError)?;
    conn.batch_execute(CREATE_WORKFLOWS_SQL)
        .map_err(|err| Box::new(err) as BoxError)?;
    Ok(())
}

/// Creates a test database from the template and a store over it.
///
/// # Errors
///
/// Returns an error if database creation or pool setup fails.
pub fn setup_store(
    cluster: &'static ManagedCluster,
) -> Result<(TemporaryDatabase, PostgresTransitionStore), BoxError> {
    let temp_db = cluster
        .temporary_database_from_template(&format!("test_{}", Uuid::new_v4().simple()), TEMPLATE_DB)?;

    let manager = ConnectionManager::<PgConnection>::new(temp_db.url());
    let pool: WorkflowPgPool = Pool::builder()
        .max_size(2)
        .build(manager)
        .map_err(|err| Box::new(err) as BoxError)?;

    Ok((temp_db, PostgresTransitionStore::new(pool)))
}

/// Store over a freshly migrated temporary database.
///
/// Drop the store before cleaning up the database so its pool is closed.
pub struct PreparedStore {
    /// Store under test.
    pub store: PostgresTransitionStore,
    /// Temporary database backing the store.
    pub temp_db: TemporaryDatabase,
}

/// Provides a prepared store, or `None` when no cluster is configured.
///
/// # Errors
///
/// Returns an error if template creation or store setup fails.
#[fixture]
pub fn prepared_store(
    postgres_cluster: PostgresCluster,
) -> Result<Option<PreparedStore>, BoxError> {
    let Some(cluster) = postgres_cluster else {
        return Ok(None);
    };
    ensure_template(cluster)?;
    let (temp_db, store) = setup_store(cluster)?;
    Ok(Some(PreparedStore { store, temp_db }))
}

/// Builds a transition for `tracker`.
#[must_use]
pub fn transition(tracker: TrackerId, role: u32, old: u32, new: u32) -> Transition {
    Transition::new(tracker, RoleId::new(role), StatusId::new(old), StatusId::new(new))
}
