//! File-Backed Storage
//!
//! Durable [`KeyValueStorage`] implementation persisting a flat
//! string-to-string map as JSON. Stands in for browser-profile storage:
//! survives restarts, degrades silently when the medium misbehaves.
//!
//! Failure semantics: an unreadable or corrupt state file is treated as
//! empty, and a failed persist keeps the in-memory state. Neither ever
//! surfaces as an error to callers.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use kernel::error::app_error::AppResult;
use tokio::sync::{RwLock, broadcast};

use crate::storage::{EVENT_CHANNEL_CAPACITY, KeyValueStorage, StorageEvent};

/// File-backed key-value storage
pub struct FileStorage {
    path: PathBuf,
    state: RwLock<HashMap<String, String>>,
    events: broadcast::Sender<StorageEvent>,
}

impl FileStorage {
    /// Open storage at `path`, loading any previously persisted state.
    ///
    /// Never fails: a missing file yields an empty store, an unreadable
    /// or corrupt file yields an empty store with a warning.
    pub async fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let state = Self::load(&path).await;
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        Self {
            path,
            state: RwLock::new(state),
            events,
        }
    }

    /// Number of stored keys
    pub async fn len(&self) -> usize {
        self.state.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.read().await.is_empty()
    }

    async fn load(path: &Path) -> HashMap<String, String> {
        let raw = match tokio::fs::read_to_string(path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return HashMap::new(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "State file unreadable, starting empty");
                return HashMap::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "State file corrupt, starting empty");
                HashMap::new()
            }
        }
    }

    /// Persist the current map. Best-effort: failures are logged and the
    /// in-memory state stays authoritative.
    async fn persist(&self, state: &HashMap<String, String>) {
        let json = match serde_json::to_string_pretty(state) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to serialize state, keeping in-memory only");
                return;
            }
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                if let Err(e) = tokio::fs::create_dir_all(parent).await {
                    tracing::warn!(path = %parent.display(), error = %e, "Failed to create state directory");
                    return;
                }
            }
        }

        if let Err(e) = tokio::fs::write(&self.path, json).await {
            tracing::warn!(path = %self.path.display(), error = %e, "Failed to persist state, keeping in-memory only");
        }
    }

    fn publish(&self, event: StorageEvent) {
        let _ = self.events.send(event);
    }
}

impl KeyValueStorage for FileStorage {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.state.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let mut state = self.state.write().await;
        state.insert(key.to_string(), value.to_string());
        self.persist(&state).await;
        drop(state);

        self.publish(StorageEvent::set(key, value));
        Ok(())
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        let mut state = self.state.write().await;
        let removed = state.remove(key).is_some();
        if removed {
            self.persist(&state).await;
        }
        drop(state);

        if removed {
            self.publish(StorageEvent::removed(key));
        }
        Ok(())
    }

    async fn clear(&self) -> AppResult<()> {
        let mut state = self.state.write().await;
        let keys: Vec<String> = state.keys().cloned().collect();
        state.clear();
        self.persist(&state).await;
        drop(state);

        for key in keys {
            self.publish(StorageEvent::removed(key));
        }
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<StorageEvent> {
        self.events.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_path(dir: &tempfile::TempDir) -> PathBuf {
        dir.path().join("state.json")
    }

    #[tokio::test]
    async fn test_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStorage::open(state_path(&dir)).await;
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_state_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = state_path(&dir);

        let store = FileStorage::open(&path).await;
        store.set("isAuthenticated", "true").await.unwrap();
        store.set("userEmail", "a@b.com").await.unwrap();
        drop(store);

        let reopened = FileStorage::open(&path).await;
        assert_eq!(
            reopened.get("isAuthenticated").await.unwrap(),
            Some("true".to_string())
        );
        assert_eq!(
            reopened.get("userEmail").await.unwrap(),
            Some("a@b.com".to_string())
        );
    }

    #[tokio::test]
    async fn test_corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = state_path(&dir);
        tokio::fs::write(&path, "{not json at all").await.unwrap();

        let store = FileStorage::open(&path).await;
        assert!(store.is_empty().await);
        assert_eq!(store.get("isAuthenticated").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_remove_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = state_path(&dir);

        let store = FileStorage::open(&path).await;
        store.set("key", "value").await.unwrap();
        store.remove("key").await.unwrap();
        drop(store);

        let reopened = FileStorage::open(&path).await;
        assert_eq!(reopened.get("key").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_parent_directory_created_on_demand() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("state.json");

        let store = FileStorage::open(&path).await;
        store.set("key", "value").await.unwrap();

        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_events_fire_on_mutation() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStorage::open(state_path(&dir)).await;
        let mut events = store.subscribe();

        store.set("key", "value").await.unwrap();
        store.clear().await.unwrap();

        assert_eq!(events.recv().await.unwrap(), StorageEvent::set("key", "value"));
        assert_eq!(events.recv().await.unwrap(), StorageEvent::removed("key"));
    }

    #[tokio::test]
    async fn test_unwritable_path_keeps_memory_state() {
        // A directory as the state path makes every persist fail
        let dir = tempfile::tempdir().unwrap();
        let store = FileStorage::open(dir.path()).await;

        store.set("key", "value").await.unwrap();
        assert_eq!(store.get("key").await.unwrap(), Some("value".to_string()));
    }
}
