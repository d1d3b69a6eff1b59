//! Error types for the store layer.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in store operations.
///
/// Not-found on delete is deliberately absent: an already-missing name is
/// an expected miss reported as `Ok(false)`, not an error.
#[derive(Debug, Error)]
pub enum StoreError {
    /// One scope could not be opened or read. Non-fatal for listing; the
    /// scope contributes nothing for that cycle.
    #[error("scope '{scope}' unreadable: {source}")]
    ScopeUnreadable {
        scope: String,
        #[source]
        source: std::io::Error,
    },

    /// Every configured scope failed to read. The caller keeps its
    /// previous snapshot and treats the cycle as a no-op.
    #[error("all {scopes} configured scopes were unreadable")]
    AllScopesUnreadable { scopes: usize },

    /// An I/O failure while deleting an entry that was present, distinct
    /// from not-found.
    #[error("failed to delete entry '{name}': {source}")]
    DeleteFailed {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// An I/O failure while writing an entry.
    #[error("failed to write entry '{name}': {source}")]
    WriteFailed {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// No scopes were configured at all; nothing to read or write.
    #[error("no store scopes configured")]
    NoScopes,

    /// Other filesystem error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
