//! The adapter contract the watch loop consumes, and the scope-union
//! implementation of it.

use crate::error::{StoreError, StoreResult};
use crate::scope::ScopeStore;
use async_trait::async_trait;
use startguard_types::{EntryName, Snapshot};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Read/mutate boundary over the external autostart store.
///
/// Pure I/O plus union semantics; no review policy. Callers treat `delete`
/// of an absent name as a benign no-op (`Ok(false)`).
#[async_trait]
pub trait StoreAdapter: Send + Sync {
    /// Enumerates entry names across all configured scopes.
    async fn list(&self) -> StoreResult<Snapshot>;

    /// Attempts removal across scopes in priority order. `Ok(true)` on the
    /// first scope that held the name, `Ok(false)` if absent everywhere.
    async fn delete(&self, name: &EntryName) -> StoreResult<bool>;

    /// Creates or replaces an entry in the primary scope.
    async fn upsert(&self, name: &EntryName, value: &str) -> StoreResult<()>;
}

/// A [`StoreAdapter`] over an ordered list of scopes.
///
/// A name is present if it appears under ANY scope. Listing is
/// partial-failure tolerant: an unreadable scope contributes nothing and is
/// logged; only when every scope fails does `list` error. The first scope
/// is the primary one and receives `upsert`s.
///
/// No cross-process locking is taken on the underlying store; a concurrent
/// external mutator can race the adapter's own writes.
pub struct ScopedStore {
    scopes: Vec<Arc<dyn ScopeStore>>,
}

impl ScopedStore {
    /// Creates a store over the given scopes, highest priority first.
    #[must_use]
    pub fn new(scopes: Vec<Arc<dyn ScopeStore>>) -> Self {
        Self { scopes }
    }

    /// Number of configured scopes.
    #[must_use]
    pub fn scope_count(&self) -> usize {
        self.scopes.len()
    }
}

#[async_trait]
impl StoreAdapter for ScopedStore {
    async fn list(&self) -> StoreResult<Snapshot> {
        let mut names = Vec::new();
        let mut unreadable = 0;

        for scope in &self.scopes {
            match scope.list().await {
                Ok(mut scope_names) => names.append(&mut scope_names),
                Err(e) => {
                    unreadable += 1;
                    warn!("Scope '{}' unreadable, skipping this cycle: {}", scope.id(), e);
                }
            }
        }

        if !self.scopes.is_empty() && unreadable == self.scopes.len() {
            return Err(StoreError::AllScopesUnreadable {
                scopes: self.scopes.len(),
            });
        }

        Ok(names.into_iter().collect())
    }

    async fn delete(&self, name: &EntryName) -> StoreResult<bool> {
        for scope in &self.scopes {
            match scope.delete(name).await {
                Ok(true) => {
                    info!("Removed entry '{}' from scope '{}'", name, scope.id());
                    return Ok(true);
                }
                Ok(false) => {
                    // Expected miss; keep walking lower-priority scopes.
                    debug!("Entry '{}' not in scope '{}'", name, scope.id());
                }
                Err(e) => return Err(e),
            }
        }
        Ok(false)
    }

    async fn upsert(&self, name: &EntryName, value: &str) -> StoreResult<()> {
        let Some(primary) = self.scopes.first() else {
            return Err(StoreError::NoScopes);
        };
        primary.upsert(name, value).await?;
        info!("Wrote entry '{}' to scope '{}'", name, primary.id());
        Ok(())
    }
}
