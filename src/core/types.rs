//! Strongly-typed wrappers for catalog identifiers
//!
//! Card names and set codes are both plain strings in MTG JSON; wrapping them
//! keeps the printing index from mixing the two up.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Card name, e.g. "Lightning Bolt"
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardName(String);

impl CardName {
    pub fn new(s: impl Into<String>) -> Self {
        CardName(s.into())
    }

    /// Parse a user-supplied card name
    ///
    /// Surrounding whitespace is trimmed and multi-part notation such as
    /// "Fire // Ice" is reduced to the first part. Returns `None` for
    /// blank input.
    pub fn normalize(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        let first = match trimmed.find('/') {
            Some(idx) if idx > 0 => trimmed[..idx].trim_end(),
            _ => trimmed,
        };
        if first.is_empty() {
            None
        } else {
            Some(CardName::new(first))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CardName {
    fn from(s: String) -> Self {
        CardName(s)
    }
}

impl From<&str> for CardName {
    fn from(s: &str) -> Self {
        CardName(s.to_string())
    }
}

/// Set code, e.g. "LEA"
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SetCode(String);

impl SetCode {
    pub fn new(s: impl Into<String>) -> Self {
        SetCode(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SetCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SetCode {
    fn from(s: &str) -> Self {
        SetCode(s.to_string())
    }
}
