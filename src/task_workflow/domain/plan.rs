//! Diffing of required and persisted transitions.

use super::Transition;
use std::collections::BTreeSet;

/// Changes needed to make the persisted transitions match the required set.
///
/// `to_insert` and `to_delete` are disjoint: one is drawn from the required
/// set and the other from its complement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncPlan {
    to_insert: BTreeSet<Transition>,
    to_delete: BTreeSet<Transition>,
}

impl SyncPlan {
    /// Computes the plan converging `existing` to `required`.
    #[must_use]
    pub fn diff(required: &BTreeSet<Transition>, existing: &BTreeSet<Transition>) -> Self {
        Self {
            to_insert: required.difference(existing).copied().collect(),
            to_delete: existing.difference(required).copied().collect(),
        }
    }

    /// Transitions that are required but not persisted.
    #[must_use]
    pub const fn to_insert(&self) -> &BTreeSet<Transition> {
        &self.to_insert
    }

    /// Transitions that are persisted but no longer required.
    #[must_use]
    pub const fn to_delete(&self) -> &BTreeSet<Transition> {
        &self.to_delete
    }

    /// Returns `true` when the store already matches the required set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.to_insert.is_empty() && self.to_delete.is_empty()
    }
}
