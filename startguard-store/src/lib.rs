//! Store adapter layer for Startguard.
//!
//! The external autostart store (a Windows-style Run key, a systemd unit
//! directory, a LaunchAgents folder, ...) is accessed only through the
//! traits in this crate. No policy lives here: reading, deleting and
//! writing entries is all this layer does.
//!
//! # Architecture
//!
//! - A [`ScopeStore`] is one store location. Implementations are pluggable;
//!   [`DirScope`] ships as the directory-of-files flavor.
//! - A [`ScopedStore`] unions an ordered list of scopes into the
//!   [`StoreAdapter`] contract the watch loop consumes: listing skips
//!   unreadable scopes, deletion walks scopes in priority order.

mod adapter;
mod dir_scope;
mod error;
mod scope;

pub use adapter::{ScopedStore, StoreAdapter};
pub use dir_scope::DirScope;
pub use error::{StoreError, StoreResult};
pub use scope::{mock, ScopeStore};
