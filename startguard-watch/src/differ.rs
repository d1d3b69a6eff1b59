//! Snapshot differ.
//!
//! Pure set difference; the loop never calls this when the scan failed, so
//! a transient read error can never erode the baseline.

use startguard_types::{ChangeSet, Snapshot};

/// Returns the names present in `current` but absent from `previous`.
///
/// Removals are deliberately ignored: an entry disappearing from the store
/// needs no operator review. The result iterates lexicographically, so
/// review order is reproducible.
#[must_use]
pub fn diff(previous: &Snapshot, current: &Snapshot) -> ChangeSet {
    previous.additions(current)
}
