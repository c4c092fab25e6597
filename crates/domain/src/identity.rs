// Copyright (C) 2026 CheckMVP Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

/// An opaque UUID identifier used as the primary key for aggregates.
///
/// Identities are immutable and either validated from an existing string
/// or freshly generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identity {
    value: Uuid,
}

impl Identity {
    /// Creates an `Identity` from an existing string.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidIdentity` if the string is not an
    /// RFC-4122-shaped UUID.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let value: Uuid =
            Uuid::parse_str(value).map_err(|_| DomainError::InvalidIdentity(value.to_string()))?;
        Ok(Self { value })
    }

    /// Generates a fresh random identity.
    #[must_use]
    pub fn generate() -> Self {
        Self {
            value: Uuid::new_v4(),
        }
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn value(&self) -> Uuid {
        self.value
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value.hyphenated())
    }
}

/// Serializes as the hyphenated UUID string.
impl Serialize for Identity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Deserializes from a string, validating the UUID shape.
impl<'de> Deserialize<'de> for Identity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::new(&value).map_err(D::Error::custom)
    }
}
