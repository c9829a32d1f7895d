//! Store contract and reconciliation tests against `PostgreSQL`.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::postgres::helpers::{
    BoxError, PreparedStore, TASK_TRACKER, prepared_store, test_runtime, transition,
};
use backlogs::task_workflow::{
    adapters::memory::{StaticRoleProvider, StaticStatusUniverse},
    domain::{RoleId, StatusId, TrackerId, Transition, required_transitions},
    ports::{TransitionStore, TransitionStoreError},
    services::TaskWorkflowService,
};
use mockable::DefaultClock;
use rstest::rstest;

const STORY_TRACKER: TrackerId = TrackerId::new(2);

#[rstest]
fn find_returns_only_the_requested_tracker(
    #[from(prepared_store)] prepared: Result<Option<PreparedStore>, BoxError>,
) -> Result<(), BoxError> {
    let Some(PreparedStore { store, temp_db }) = prepared? else {
        return Ok(());
    };
    let rt = test_runtime()?;
    let task_rows = BTreeSet::from([
        transition(TASK_TRACKER, 10, 1, 2),
        transition(TASK_TRACKER, 10, 2, 1),
    ]);
    let story_row = transition(STORY_TRACKER, 10, 1, 2);

    for row in task_rows.iter().chain([&story_row]) {
        rt.block_on(store.create(row))?;
    }
    let found: BTreeSet<Transition> = rt.block_on(store.find(TASK_TRACKER))?.into_iter().collect();

    assert_eq!(found, task_rows);
    drop(store);
    temp_db.cleanup()
}

#[rstest]
fn duplicate_create_is_rejected_by_the_unique_index(
    #[from(prepared_store)] prepared: Result<Option<PreparedStore>, BoxError>,
) -> Result<(), BoxError> {
    let Some(PreparedStore { store, temp_db }) = prepared? else {
        return Ok(());
    };
    let rt = test_runtime()?;
    let row = transition(TASK_TRACKER, 10, 1, 2);
    rt.block_on(store.create(&row))?;

    let result = rt.block_on(store.create(&row));

    assert!(
        matches!(result, Err(TransitionStoreError::Duplicate(t)) if t == row),
        "expected Duplicate error, got: {result:?}"
    );
    assert_eq!(rt.block_on(store.find(TASK_TRACKER))?.len(), 1);
    drop(store);
    temp_db.cleanup()
}

#[rstest]
fn delete_reports_whether_a_row_was_removed(
    #[from(prepared_store)] prepared: Result<Option<PreparedStore>, BoxError>,
) -> Result<(), BoxError> {
    let Some(PreparedStore { store, temp_db }) = prepared? else {
        return Ok(());
    };
    let rt = test_runtime()?;
    let row = transition(TASK_TRACKER, 10, 1, 2);
    let reverse = row.reversed();
    rt.block_on(store.create(&row))?;
    rt.block_on(store.create(&reverse))?;

    assert!(rt.block_on(store.delete(&row))?);
    assert!(!rt.block_on(store.delete(&row))?);
    assert_eq!(rt.block_on(store.find(TASK_TRACKER))?, vec![reverse]);
    drop(store);
    temp_db.cleanup()
}

#[rstest]
fn synchronize_converges_without_touching_other_trackers(
    #[from(prepared_store)] prepared: Result<Option<PreparedStore>, BoxError>,
) -> Result<(), BoxError> {
    let Some(PreparedStore { store, temp_db }) = prepared? else {
        return Ok(());
    };
    let rt = test_runtime()?;
    let foreign = transition(STORY_TRACKER, 10, 1, 2);
    let stale = transition(TASK_TRACKER, 10, 1, 9);
    rt.block_on(store.create(&foreign))?;
    rt.block_on(store.create(&stale))?;

    let status_ids: BTreeSet<StatusId> = [1, 2, 3].into_iter().map(StatusId::new).collect();
    let role_ids = BTreeSet::from([RoleId::new(10)]);
    let service = TaskWorkflowService::new(
        Arc::new(store.clone()),
        Arc::new(StaticStatusUniverse::for_tracker(TASK_TRACKER, status_ids.clone())),
        Arc::new(StaticRoleProvider::for_tracker(TASK_TRACKER, role_ids.clone())),
        Arc::new(DefaultClock),
    );

    let first = rt.block_on(service.synchronize(TASK_TRACKER))?;
    let second = rt.block_on(service.synchronize(TASK_TRACKER))?;

    let expected = required_transitions(TASK_TRACKER, &status_ids, &role_ids);
    assert_eq!(first.deleted(), &BTreeSet::from([stale]));
    assert_eq!(first.inserted(), &expected);
    assert!(second.is_noop(), "second run changed the store: {second:?}");
    let stored: BTreeSet<Transition> = rt.block_on(store.find(TASK_TRACKER))?.into_iter().collect();
    assert_eq!(stored, expected);
    assert_eq!(rt.block_on(store.find(STORY_TRACKER))?, vec![foreign]);
    drop(service);
    drop(store);
    temp_db.cleanup()
}

