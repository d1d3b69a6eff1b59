//! One location within the external store.
//!
//! A scope is the unit of partial failure: listing tolerates individual
//! unreadable scopes, and deletion walks scopes in a fixed priority order.

use crate::error::StoreResult;
use async_trait::async_trait;
use startguard_types::EntryName;

/// One store location holding named autostart entries.
///
/// Implementations wrap whatever the platform's persistent store is. They
/// perform I/O only; union semantics and ordering policy live in
/// [`ScopedStore`](crate::ScopedStore).
#[async_trait]
pub trait ScopeStore: Send + Sync {
    /// Stable identifier for logs and errors (e.g. the directory path).
    fn id(&self) -> &str;

    /// Enumerates entry names in this scope.
    async fn list(&self) -> StoreResult<Vec<EntryName>>;

    /// Removes an entry by name.
    ///
    /// Returns `Ok(false)` when the name is not present — an expected
    /// miss, not an error. Only unexpected I/O failures are `Err`.
    async fn delete(&self, name: &EntryName) -> StoreResult<bool>;

    /// Creates or replaces an entry.
    async fn upsert(&self, name: &EntryName, value: &str) -> StoreResult<()>;
}

/// A scripted in-memory scope for testing.
pub mod mock {
    use super::*;
    use crate::error::StoreError;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    /// In-memory [`ScopeStore`] with injectable failures and call recording.
    #[derive(Debug, Default)]
    pub struct MockScope {
        id: String,
        entries: Arc<Mutex<BTreeMap<EntryName, String>>>,
        fail_reads: AtomicBool,
        fail_deletes: AtomicBool,
        list_calls: AtomicUsize,
        delete_calls: Mutex<Vec<EntryName>>,
    }

    impl MockScope {
        /// Creates an empty mock scope.
        pub fn new(id: impl Into<String>) -> Self {
            Self {
                id: id.into(),
                ..Self::default()
            }
        }

        /// Creates a mock scope preloaded with entries.
        pub fn with_entries<'a>(
            id: impl Into<String>,
            names: impl IntoIterator<Item = &'a str>,
        ) -> Self {
            let scope = Self::new(id);
            {
                let mut entries = scope.entries.lock().unwrap();
                for n in names {
                    entries.insert(EntryName::new(n).unwrap(), String::new());
                }
            }
            scope
        }

        /// Inserts an entry directly, bypassing `upsert`.
        pub fn insert(&self, name: &str, value: &str) {
            self.entries
                .lock()
                .unwrap()
                .insert(EntryName::new(name).unwrap(), value.to_string());
        }

        /// Makes subsequent `list` calls fail with `ScopeUnreadable`.
        pub fn set_fail_reads(&self, fail: bool) {
            self.fail_reads.store(fail, Ordering::SeqCst);
        }

        /// Makes subsequent `delete` calls on present entries fail.
        pub fn set_fail_deletes(&self, fail: bool) {
            self.fail_deletes.store(fail, Ordering::SeqCst);
        }

        /// Returns true if the entry is currently present.
        pub fn contains(&self, name: &str) -> bool {
            self.entries
                .lock()
                .unwrap()
                .contains_key(&EntryName::new(name).unwrap())
        }

        /// Returns the stored value for an entry, if present.
        pub fn value_of(&self, name: &str) -> Option<String> {
            self.entries
                .lock()
                .unwrap()
                .get(&EntryName::new(name).unwrap())
                .cloned()
        }

        /// Returns every name passed to `delete`, in call order.
        pub fn delete_calls(&self) -> Vec<EntryName> {
            self.delete_calls.lock().unwrap().clone()
        }

        /// Number of `list` calls made so far, failed ones included.
        pub fn list_count(&self) -> usize {
            self.list_calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ScopeStore for MockScope {
        fn id(&self) -> &str {
            &self.id
        }

        async fn list(&self) -> StoreResult<Vec<EntryName>> {
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_reads.load(Ordering::SeqCst) {
                return Err(StoreError::ScopeUnreadable {
                    scope: self.id.clone(),
                    source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "scripted"),
                });
            }
            Ok(self.entries.lock().unwrap().keys().cloned().collect())
        }

        async fn delete(&self, name: &EntryName) -> StoreResult<bool> {
            self.delete_calls.lock().unwrap().push(name.clone());
            let mut entries = self.entries.lock().unwrap();
            if !entries.contains_key(name) {
                return Ok(false);
            }
            if self.fail_deletes.load(Ordering::SeqCst) {
                return Err(StoreError::DeleteFailed {
                    name: name.to_string(),
                    source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "scripted"),
                });
            }
            entries.remove(name);
            Ok(true)
        }

        async fn upsert(&self, name: &EntryName, value: &str) -> StoreResult<()> {
            self.entries
                .lock()
                .unwrap()
                .insert(name.clone(), value.to_string());
            Ok(())
        }
    }
}
