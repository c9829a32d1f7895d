//! Diesel schema for workflow transition persistence.

diesel::table! {
    /// Workflow transitions granted to roles per tracker.
    workflows (id) {
        /// Surrogate row identifier.
        id -> Int4,
        /// Tracker the transition applies to.
        tracker_id -> Int4,
        /// Status the work item moves from.
        old_status_id -> Int4,
        /// Status the work item moves to.
        new_status_id -> Int4,
        /// Role granted the transition.
        role_id -> Int4,
    }
}
