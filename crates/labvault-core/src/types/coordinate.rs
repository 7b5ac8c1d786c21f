//! Normalized slot coordinate type.
//!
//! A [`Coordinate`] is a string key addressing one slot inside a single
//! container's 2D grid (e.g. `A1`, `3-7`). Lookup is case-insensitive:
//! every coordinate is normalized to uppercase with surrounding whitespace
//! trimmed at construction time, so two coordinates that differ only in
//! case compare equal and hash identically.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A normalized slot address within one container's grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String")]
pub struct Coordinate(String);

impl Coordinate {
    /// Create a coordinate, normalizing to trimmed uppercase.
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().trim().to_uppercase())
    }

    /// Return the normalized coordinate string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the coordinate is empty after normalization.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Coordinate {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Coordinate {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}
