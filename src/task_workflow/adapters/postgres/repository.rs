//! `PostgreSQL` store implementation for workflow transitions.

use super::{
    models::{NewWorkflowRow, WorkflowRow, to_column},
    schema::workflows,
};
use crate::task_workflow::{
    domain::{TrackerId, Transition},
    ports::{TransitionStore, TransitionStoreError, TransitionStoreResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by workflow adapters.
pub type WorkflowPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed transition store over the `workflows` table.
///
/// Uniqueness of the 4-tuple is enforced by the
/// `idx_workflows_transition_unique` index.
#[derive(Debug, Clone)]
pub struct PostgresTransitionStore {
    pool: WorkflowPgPool,
}

impl PostgresTransitionStore {
    /// Creates a new store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: WorkflowPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TransitionStoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TransitionStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TransitionStoreError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TransitionStoreError::persistence)?
    }
}

#[async_trait]
impl TransitionStore for PostgresTransitionStore {
    async fn find(&self, tracker_id: TrackerId) -> TransitionStoreResult<Vec<Transition>> {
        let tracker_column = to_column(tracker_id.value())?;
        self.run_blocking(move |connection| {
            let rows = workflows::table
                .filter(workflows::tracker_id.eq(tracker_column))
                .select(WorkflowRow::as_select())
                .load::<WorkflowRow>(connection)
                .map_err(TransitionStoreError::persistence)?;
            rows.into_iter().map(WorkflowRow::into_transition).collect()
        })
        .await
    }

    async fn create(&self, transition: &Transition) -> TransitionStoreResult<()> {
        let duplicate = *transition;
        let new_row = NewWorkflowRow::from_transition(transition)?;
        self.run_blocking(move |connection| {
            diesel::insert_into(workflows::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TransitionStoreError::Duplicate(duplicate)
                    }
                    _ => TransitionStoreError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn delete(&self, transition: &Transition) -> TransitionStoreResult<bool> {
        let key = NewWorkflowRow::from_transition(transition)?;
        self.run_blocking(move |connection| {
            let removed = diesel::delete(
                workflows::table
                    .filter(workflows::tracker_id.eq(key.tracker_id))
                    .filter(workflows::role_id.eq(key.role_id))
                    .filter(workflows::old_status_id.eq(key.old_status_id))
                    .filter(workflows::new_status_id.eq(key.new_status_id)),
            )
            .execute(connection)
            .map_err(TransitionStoreError::persistence)?;
            Ok(removed > 0)
        })
        .await
    }
}
