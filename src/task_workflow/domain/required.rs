//! Generation of the transitions the task tracker must have.

use super::{RoleId, StatusId, TrackerId, Transition};
use std::collections::BTreeSet;

/// Returns every transition required for `tracker_id`.
///
/// Each unordered pair of distinct statuses yields both directions for
/// every role, giving `n * (n - 1) * roles` transitions. Fewer than two
/// statuses or an empty role set yields nothing, and self-transitions are
/// never produced.
#[must_use]
pub fn required_transitions(
    tracker_id: TrackerId,
    status_ids: &BTreeSet<StatusId>,
    role_ids: &BTreeSet<RoleId>,
) -> BTreeSet<Transition> {
    status_pairs(status_ids)
        .flat_map(move |(first, second)| {
            role_ids.iter().flat_map(move |&role_id| {
                let forward = Transition::new(tracker_id, role_id, first, second);
                [forward, forward.reversed()]
            })
        })
        .collect()
}

/// Iterates every 2-combination of distinct statuses.
fn status_pairs(
    status_ids: &BTreeSet<StatusId>,
) -> impl Iterator<Item = (StatusId, StatusId)> + '_ {
    status_ids.iter().enumerate().flat_map(move |(position, &first)| {
        status_ids
            .iter()
            .skip(position + 1)
            .map(move |&second| (first, second))
    })
}
