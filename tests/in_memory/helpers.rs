//! Shared test helpers for in-memory workflow reconciliation tests.

use std::collections::BTreeSet;
use std::sync::Arc;

use backlogs::task_workflow::{
    adapters::memory::{InMemoryTransitionStore, StaticRoleProvider, StaticStatusUniverse},
    domain::{RoleId, StatusId, TrackerId, Transition},
    services::TaskWorkflowService,
};
use mockable::DefaultClock;
use rstest::fixture;

/// Tracker identifier used as the task tracker in tests.
pub const TASK_TRACKER: TrackerId = TrackerId::new(4);

/// Service type wired to in-memory adapters.
pub type InMemoryService = TaskWorkflowService<
    InMemoryTransitionStore,
    StaticStatusUniverse,
    StaticRoleProvider,
    DefaultClock,
>;

/// In-memory adapters together with the service using them.
pub struct Workspace {
    /// Transition store shared with the service.
    pub store: InMemoryTransitionStore,
    /// Status universe shared with the service.
    pub statuses: StaticStatusUniverse,
    /// Role provider shared with the service.
    pub roles: StaticRoleProvider,
    /// Service under test.
    pub service: InMemoryService,
}

impl Workspace {
    /// Replaces the task tracker's status universe.
    pub fn set_statuses(&self, status_ids: &[u32]) {
        self.statuses
            .replace(TASK_TRACKER, status_ids.iter().copied().map(StatusId::new));
    }

    /// Replaces the task tracker's roles.
    pub fn set_roles(&self, role_ids: &[u32]) {
        self.roles
            .replace(TASK_TRACKER, role_ids.iter().copied().map(RoleId::new));
    }
}

/// Provides a workspace whose store starts with `seed`.
#[must_use]
pub fn workspace_with(seed: impl IntoIterator<Item = Transition>) -> Workspace {
    let store = InMemoryTransitionStore::with_transitions(seed);
    let statuses = StaticStatusUniverse::for_tracker(TASK_TRACKER, Vec::<StatusId>::new());
    let roles = StaticRoleProvider::for_tracker(TASK_TRACKER, Vec::<RoleId>::new());
    let service = TaskWorkflowService::new(
        Arc::new(store.clone()),
        Arc::new(statuses.clone()),
        Arc::new(roles.clone()),
        Arc::new(DefaultClock),
    );
    Workspace {
        store,
        statuses,
        roles,
        service,
    }
}

/// Provides an empty workspace.
#[fixture]
pub fn workspace() -> Workspace {
    workspace_with(Vec::<Transition>::new())
}

/// Builds a task tracker transition.
#[must_use]
pub fn task_transition(role: u32, old: u32, new: u32) -> Transition {
    Transition::new(
        TASK_TRACKER,
        RoleId::new(role),
        StatusId::new(old),
        StatusId::new(new),
    )
}

/// Builds a set of task tracker transitions for one role.
#[must_use]
pub fn task_transitions(role: u32, pairs: &[(u32, u32)]) -> BTreeSet<Transition> {
    pairs
        .iter()
        .map(|&(old, new)| task_transition(role, old, new))
        .collect()
}
