use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::validation::ValidationError;

/// Returns the canonical lookup key for a designation: trimmed and uppercased.
pub fn canonical_key(value: &str) -> String {
    value.trim().to_uppercase()
}

/// Primary designation of a near-Earth object (e.g. `2015 AB`, `433`).
///
/// Always non-empty and stored in canonical uppercase form, so two
/// designations compare equal regardless of the case they were parsed from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Designation(String);

impl Designation {
    /// Parses a designation, rejecting empty input.
    pub fn parse(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let key = canonical_key(value.as_ref());
        if key.is_empty() {
            return Err(ValidationError::Empty {
                field: "designation",
            });
        }
        Ok(Self(key))
    }

    /// Returns the canonical designation string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Designation {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl FromStr for Designation {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Designation> for String {
    fn from(value: Designation) -> Self {
        value.0
    }
}

impl AsRef<str> for Designation {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Designation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

macro_rules! index_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(usize);

        impl $name {
            /// Wraps a position in the owning collection.
            pub fn new(index: usize) -> Self {
                Self(index)
            }

            /// Returns the position in the owning collection.
            pub fn index(self) -> usize {
                self.0
            }
        }

        impl From<usize> for $name {
            fn from(index: usize) -> Self {
                Self(index)
            }
        }
    };
}

index_id!(BodyId, "Position of a [`Body`](crate::Body) in the store's body collection.");
index_id!(
    EventId,
    "Position of an [`ApproachEvent`](crate::ApproachEvent) in the store's event collection."
);
