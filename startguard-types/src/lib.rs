//! Core type definitions for Startguard.
//!
//! This crate defines the fundamental, store-agnostic types used throughout
//! the watcher:
//! - Entry names (the key space of the external autostart store)
//! - Immutable snapshots and the change sets derived from them
//! - Operator decisions
//!
//! Anything that touches a concrete store location or the review loop
//! belongs in `startguard-store` / `startguard-watch`, not here.

mod decision;
mod name;
mod snapshot;

pub use decision::Decision;
pub use name::EntryName;
pub use snapshot::{ChangeSet, Snapshot};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid entry name: {0}")]
    InvalidName(String),
}
