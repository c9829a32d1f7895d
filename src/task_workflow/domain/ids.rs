//! Identifier types for the task workflow domain.
//!
//! Every identifier is owned by the host application and treated as an
//! opaque non-negative integer. The `u32` representation keeps identity
//! tokens free of sign characters, which would otherwise collide with the
//! token delimiter.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! host_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Wraps a raw host identifier.
            #[must_use]
            pub const fn new(value: u32) -> Self {
                Self(value)
            }

            /// Returns the raw host identifier.
            #[must_use]
            pub const fn value(self) -> u32 {
                self.0
            }
        }

        impl From<u32> for $name {
            fn from(value: u32) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

host_id!(
    /// Identifier of a host tracker (category of work item).
    TrackerId
);

host_id!(
    /// Identifier of a host permission role.
    RoleId
);

host_id!(
    /// Identifier of a host issue status.
    StatusId
);

host_id!(
    /// Identifier of a host project.
    ProjectId
);
