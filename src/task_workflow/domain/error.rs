//! Error types for the task workflow domain.

use thiserror::Error;

/// Error returned when a workflow identity token cannot be decoded.
///
/// Tokens produced by [`super::WorkflowId::encode`] never fail, so this
/// error signals corrupted or foreign input and is treated as fatal.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MalformedWorkflowIdError {
    /// The token does not split into exactly four components.
    #[error("workflow id '{token}' has {found} components, expected 4")]
    ComponentCount {
        /// The rejected token.
        token: String,
        /// Number of components found.
        found: usize,
    },

    /// A component is not a canonical non-negative decimal integer.
    #[error("workflow id '{token}' has invalid component '{component}'")]
    InvalidComponent {
        /// The rejected token.
        token: String,
        /// The offending component.
        component: String,
    },
}
