//! In-memory adapters for task workflow reconciliation.

mod providers;
mod store;

pub use providers::{StaticRoleProvider, StaticStatusUniverse};
pub use store::InMemoryTransitionStore;
