//! Versioned persistence of the session state
//!
//! The whole merged state serializes as JSON under a fixed key behind a
//! minimal key-value boundary. The schema version is checked on load;
//! migrating an older snapshot is the caller's concern.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::session::SessionState;

/// Storage key for the persisted session snapshot
pub const STATE_KEY: &str = "glaze";

/// Current snapshot schema version
pub const STATE_VERSION: u32 = 7;

/// Key-value boundary the snapshot is persisted through
pub trait SnapshotStorage {
    fn load(&self, key: &str) -> Result<Option<String>, SnapshotError>;
    fn store(&mut self, key: &str, value: &str) -> Result<(), SnapshotError>;
}

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot serialization failed: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("snapshot version {found} does not match {expected}, migration required")]
    VersionMismatch { found: u32, expected: u32 },
    #[error("snapshot storage backend: {0}")]
    Backend(String),
}

#[derive(Serialize)]
struct SnapshotRef<'a> {
    version: u32,
    state: &'a SessionState,
}

#[derive(Deserialize)]
struct Snapshot {
    version: u32,
    state: SessionState,
}

/// Persist the merged state under [`STATE_KEY`].
pub fn save_session(
    storage: &mut dyn SnapshotStorage,
    state: &SessionState,
) -> Result<(), SnapshotError> {
    let body = serde_json::to_string(&SnapshotRef {
        version: STATE_VERSION,
        state,
    })?;
    storage.store(STATE_KEY, &body)?;
    debug!(bytes = body.len(), "session snapshot stored");
    Ok(())
}

/// Load the persisted state, if any. Returns `Ok(None)` when nothing was
/// stored; a snapshot from another schema version is an error.
pub fn load_session(storage: &dyn SnapshotStorage) -> Result<Option<SessionState>, SnapshotError> {
    let Some(body) = storage.load(STATE_KEY)? else {
        return Ok(None);
    };
    let snapshot: Snapshot = serde_json::from_str(&body)?;
    if snapshot.version != STATE_VERSION {
        return Err(SnapshotError::VersionMismatch {
            found: snapshot.version,
            expected: STATE_VERSION,
        });
    }
    debug!("session snapshot loaded");
    Ok(Some(snapshot.state))
}

/// In-process backend for tests and the design tool
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: std::collections::HashMap<String, String>,
}

impl SnapshotStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, SnapshotError> {
        Ok(self.entries.get(key).cloned())
    }

    fn store(&mut self, key: &str, value: &str) -> Result<(), SnapshotError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Browser localStorage backend
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    fn backend(&self) -> Result<web_sys::Storage, SnapshotError> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or_else(|| SnapshotError::Backend("localStorage unavailable".into()))
    }
}

#[cfg(target_arch = "wasm32")]
impl SnapshotStorage for LocalStorage {
    fn load(&self, key: &str) -> Result<Option<String>, SnapshotError> {
        self.backend()?
            .get_item(key)
            .map_err(|_| SnapshotError::Backend("localStorage read failed".into()))
    }

    fn store(&mut self, key: &str, value: &str) -> Result<(), SnapshotError> {
        self.backend()?
            .set_item(key, value)
            .map_err(|_| SnapshotError::Backend("localStorage write failed".into()))
    }
}
