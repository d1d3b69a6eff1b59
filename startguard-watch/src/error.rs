//! Error types for the watch layer.

use startguard_store::StoreError;
use thiserror::Error;

/// Result type for watch operations.
pub type WatchResult<T> = Result<T, WatchError>;

/// Errors that can occur in the watch loop.
#[derive(Debug, Error)]
pub enum WatchError {
    /// Store adapter failure. Inside the loop these are logged and the
    /// cycle is skipped; they never abort the watcher.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// The approval prompt went away (channel closed, UI gone).
    #[error("approval prompt closed")]
    PromptClosed,

    /// Shutdown was requested; the in-progress cycle was abandoned
    /// without committing its snapshot.
    #[error("shutdown requested")]
    Shutdown,
}
