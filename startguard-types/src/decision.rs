//! Operator decisions about newly detected entries.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The operator's verdict on one new autostart entry.
///
/// Ephemeral: produced by the approval prompt, consumed immediately by the
/// watch loop, never persisted. Past decisions carry no weight — a name
/// denied and deleted in one cycle is reviewed afresh if it reappears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    /// Keep the entry in the store.
    Allow,
    /// Remove the entry from the store.
    Deny,
}

impl Decision {
    /// Returns true for `Deny`.
    #[must_use]
    pub fn is_deny(&self) -> bool {
        matches!(self, Decision::Deny)
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Allow => write!(f, "allow"),
            Decision::Deny => write!(f, "deny"),
        }
    }
}
