//! Workflow identity tokens.
//!
//! A token is the four key fields of a [`Transition`] written as canonical
//! decimal and joined with `-`, in the order tracker, role, old status, new
//! status. Decimal formatting never emits the delimiter, so the encoding is
//! injective and [`WorkflowId::decode`] is its exact inverse.

use super::{MalformedWorkflowIdError, RoleId, StatusId, TrackerId, Transition};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const DELIMITER: char = '-';

/// String identity token of a [`Transition`].
///
/// Tokens built with [`WorkflowId::encode`] always decode. Tokens read from
/// elsewhere are unchecked until [`WorkflowId::decode`] is called.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkflowId(String);

impl WorkflowId {
    /// Encodes a transition's key fields as a token.
    #[must_use]
    pub fn encode(transition: &Transition) -> Self {
        Self(format!(
            "{}{DELIMITER}{}{DELIMITER}{}{DELIMITER}{}",
            transition.tracker_id(),
            transition.role_id(),
            transition.old_status_id(),
            transition.new_status_id(),
        ))
    }

    /// Wraps a raw token without validating it.
    #[must_use]
    pub fn from_raw(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Decodes the token back into the transition key.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedWorkflowIdError`] when the token does not split
    /// into exactly four canonical decimal components.
    pub fn decode(&self) -> Result<Transition, MalformedWorkflowIdError> {
        let components: Vec<&str> = self.0.split(DELIMITER).collect();
        let [tracker, role, old_status, new_status] = components.as_slice() else {
            return Err(MalformedWorkflowIdError::ComponentCount {
                token: self.0.clone(),
                found: components.len(),
            });
        };

        Ok(Transition::new(
            TrackerId::new(self.component(tracker)?),
            RoleId::new(self.component(role)?),
            StatusId::new(self.component(old_status)?),
            StatusId::new(self.component(new_status)?),
        ))
    }

    /// Returns the token text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn component(&self, raw: &str) -> Result<u32, MalformedWorkflowIdError> {
        // Only the exact output of integer formatting round-trips, so signs,
        // padding zeros and whitespace are all rejected.
        let canonical = !raw.is_empty()
            && raw.bytes().all(|byte| byte.is_ascii_digit())
            && (raw == "0" || !raw.starts_with('0'));
        let parsed = canonical.then(|| raw.parse::<u32>().ok()).flatten();
        parsed.ok_or_else(|| MalformedWorkflowIdError::InvalidComponent {
            token: self.0.clone(),
            component: raw.to_owned(),
        })
    }
}

impl AsRef<str> for WorkflowId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for WorkflowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for WorkflowId {
    type Err = MalformedWorkflowIdError;

    /// Parses a token, accepting it only if it decodes.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let id = Self::from_raw(token);
        id.decode()?;
        Ok(id)
    }
}

impl FromStr for Transition {
    type Err = MalformedWorkflowIdError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        WorkflowId::from_raw(token).decode()
    }
}
