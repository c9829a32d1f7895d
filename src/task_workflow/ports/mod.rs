//! Port contracts for task workflow reconciliation.
//!
//! Ports define infrastructure-agnostic interfaces used by the reconciler.

pub mod providers;
pub mod store;

pub use providers::{ProviderError, ProviderResult, RoleProvider, StatusUniverseProvider};
pub use store::{TransitionStore, TransitionStoreError, TransitionStoreResult};
