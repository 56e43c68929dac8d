//! Strongly-typed ID wrappers
//!
//! Statement identifiers are surrogate keys handed out by the storage layer.
//! The newtype keeps them from being mixed up with plain counters.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Macro to generate sequential ID newtype wrappers
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// The first ID handed out by a fresh store
            pub const FIRST: Self = Self(1);

            /// Create an ID from a raw value
            pub fn from_raw(value: u64) -> Self {
                Self(value)
            }

            /// Get the underlying value
            pub fn value(&self) -> u64 {
                self.0
            }

            /// The ID that follows this one, if there is one
            pub fn next(&self) -> Option<Self> {
                self.0.checked_add(1).map(Self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().parse()?))
            }
        }
    };
}

define_id!(StatementId);
