//! The key type of the external autostart store.
//!
//! Entry names are opaque strings owned by the store; the watcher only
//! needs ordering (for deterministic review order), equality, and display.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Name of one autostart registration within a store scope.
///
/// Names are unique per scope; an entry is considered present overall when
/// its name appears under any configured scope.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryName(String);

impl EntryName {
    /// Creates an entry name. Empty names and names containing path
    /// separators are rejected — they cannot address a store key.
    pub fn new(name: impl Into<String>) -> crate::Result<Self> {
        let name = name.into();
        if name.is_empty() || name.contains(['/', '\\']) {
            return Err(crate::Error::InvalidName(name));
        }
        Ok(Self(name))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntryName {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for EntryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
