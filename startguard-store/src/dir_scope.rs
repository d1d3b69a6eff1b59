//! Directory-backed store scope.
//!
//! Models stores that are "a folder of registrations" — a systemd unit
//! directory, a macOS LaunchAgents folder, an XDG autostart directory.
//! Each entry is one regular file: the file name is the entry name, the
//! file contents are the command string. The format of the contents is
//! opaque to this layer.

use crate::error::{StoreError, StoreResult};
use crate::scope::ScopeStore;
use async_trait::async_trait;
use startguard_types::EntryName;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A [`ScopeStore`] over one directory of entry files.
#[derive(Debug, Clone)]
pub struct DirScope {
    id: String,
    path: PathBuf,
}

impl DirScope {
    /// Creates a scope over the given directory. The directory is not
    /// required to exist yet; a missing directory reads as unreadable.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            id: path.display().to_string(),
            path,
        }
    }

    /// The directory this scope reads from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ScopeStore for DirScope {
    fn id(&self) -> &str {
        &self.id
    }

    async fn list(&self) -> StoreResult<Vec<EntryName>> {
        let path = self.path.clone();
        let scope = self.id.clone();
        run_blocking(move || {
            let read_dir = std::fs::read_dir(&path).map_err(|source| {
                StoreError::ScopeUnreadable {
                    scope: scope.clone(),
                    source,
                }
            })?;

            let mut names = Vec::new();
            for dir_entry in read_dir {
                let dir_entry = dir_entry.map_err(|source| StoreError::ScopeUnreadable {
                    scope: scope.clone(),
                    source,
                })?;
                if !dir_entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
                    continue;
                }
                match EntryName::new(dir_entry.file_name().to_string_lossy()) {
                    Ok(name) => names.push(name),
                    Err(e) => debug!("Skipping unrepresentable entry in {}: {}", scope, e),
                }
            }
            Ok(names)
        })
        .await
    }

    async fn delete(&self, name: &EntryName) -> StoreResult<bool> {
        let target = self.path.join(name.as_str());
        let name = name.to_string();
        run_blocking(move || match std::fs::remove_file(&target) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(source) => Err(StoreError::DeleteFailed { name, source }),
        })
        .await
    }

    async fn upsert(&self, name: &EntryName, value: &str) -> StoreResult<()> {
        let dir = self.path.clone();
        let target = dir.join(name.as_str());
        let name = name.to_string();
        let value = value.to_string();
        run_blocking(move || {
            std::fs::create_dir_all(&dir)
                .and_then(|()| std::fs::write(&target, value.as_bytes()))
                .map_err(|source| StoreError::WriteFailed { name, source })
        })
        .await
    }
}

/// Runs blocking filesystem work on the blocking pool.
async fn run_blocking<T>(
    work: impl FnOnce() -> StoreResult<T> + Send + 'static,
) -> StoreResult<T>
where
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| StoreError::Io(io::Error::other(e)))?
}
