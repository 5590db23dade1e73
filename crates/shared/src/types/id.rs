//! Typed IDs for type-safe filter references.
//!
//! Using typed IDs prevents accidentally passing a `UnitId` where an `OperatorId` is expected.
//! The lookup service and the report query both speak plain integers, so every ID is a
//! transparent wrapper around `u64`.

use serde::{Deserialize, Serialize};

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(
            Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl $name {
            /// Creates an ID from a raw integer.
            #[must_use]
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            /// Returns the inner integer.
            #[must_use]
            pub const fn into_inner(self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().parse()?))
            }
        }
    };
}

typed_id!(SiteId, "Unique identifier for a site (project).");
typed_id!(UnitId, "Unique identifier for a unit (department).");
typed_id!(OperatorId, "Unique identifier for an operator.");

impl SiteId {
    /// Sentinel meaning "no site chosen".
    pub const NONE: Self = Self(0);

    /// Returns true if this is the "no site chosen" sentinel.
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
