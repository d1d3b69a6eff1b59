//! Snapshots of the store's key space and the deltas between them.
//!
//! A snapshot is immutable once taken. The watch loop holds exactly one
//! previous snapshot at a time and replaces it only after a completed
//! comparison cycle, so these types expose no in-place mutation beyond
//! construction helpers.

use crate::EntryName;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// An immutable set of entry names captured at one instant.
///
/// Backed by a `BTreeSet`, so iteration is lexicographic — the review loop
/// relies on this for reproducible processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    names: BTreeSet<EntryName>,
}

impl Snapshot {
    /// Creates an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the snapshot contains the name.
    #[must_use]
    pub fn contains(&self, name: &EntryName) -> bool {
        self.names.contains(name)
    }

    /// Returns the number of names in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if the snapshot is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates names in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &EntryName> {
        self.names.iter()
    }

    /// Returns the names newly present in `current` relative to `self`.
    #[must_use]
    pub fn additions(&self, current: &Snapshot) -> ChangeSet {
        ChangeSet {
            added: current.names.difference(&self.names).cloned().collect(),
        }
    }

    /// Returns a copy of this snapshot without the given names.
    ///
    /// Used when committing a cycle: names the store confirmed as deleted
    /// are dropped so a later re-add is detected as new again.
    #[must_use]
    pub fn without<'a>(&self, names: impl IntoIterator<Item = &'a EntryName>) -> Snapshot {
        let mut out = self.names.clone();
        for name in names {
            out.remove(name);
        }
        Snapshot { names: out }
    }
}

impl FromIterator<EntryName> for Snapshot {
    fn from_iter<I: IntoIterator<Item = EntryName>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = &'a EntryName;
    type IntoIter = std::collections::btree_set::Iter<'a, EntryName>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}

/// The names newly present in one snapshot relative to the prior one.
///
/// Derived, never persisted: computed once per cycle, consumed by the
/// review loop, discarded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    added: BTreeSet<EntryName>,
}

impl ChangeSet {
    /// Returns true if nothing was added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty()
    }

    /// Number of added names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.added.len()
    }

    /// Returns true if the change set contains the name.
    #[must_use]
    pub fn contains(&self, name: &EntryName) -> bool {
        self.added.contains(name)
    }

    /// Iterates added names in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &EntryName> {
        self.added.iter()
    }
}

impl FromIterator<EntryName> for ChangeSet {
    fn from_iter<I: IntoIterator<Item = EntryName>>(iter: I) -> Self {
        Self {
            added: iter.into_iter().collect(),
        }
    }
}
