//! Type-safe identifier wrapper for building-catalogue entries.
//!
//! Catalogue content is data-driven, so definition identifiers are plain
//! strings on the wire (`"workers-house-a"`). The newtype keeps them from
//! being mixed up with labels or reason strings at compile time.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Identifier of a building definition in the era catalogue.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export, export_to = "bindings/")]
pub struct BuildingDefId(pub String);

impl BuildingDefId {
    /// Create an identifier from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for BuildingDefId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BuildingDefId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for BuildingDefId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for BuildingDefId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
