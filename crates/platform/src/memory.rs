//! In-Memory Storage
//!
//! Non-durable [`KeyValueStorage`] implementation. Used by tests and as
//! the stand-in when durable storage is disabled.

use std::collections::HashMap;

use kernel::error::app_error::AppResult;
use tokio::sync::{RwLock, broadcast};

use crate::storage::{EVENT_CHANNEL_CAPACITY, KeyValueStorage, StorageEvent};

/// In-memory key-value storage
pub struct MemoryStorage {
    state: RwLock<HashMap<String, String>>,
    events: broadcast::Sender<StorageEvent>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            state: RwLock::new(HashMap::new()),
            events,
        }
    }

    fn publish(&self, event: StorageEvent) {
        // No receivers is fine
        let _ = self.events.send(event);
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStorage for MemoryStorage {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.state.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.state
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        self.publish(StorageEvent::set(key, value));
        Ok(())
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        let removed = self.state.write().await.remove(key).is_some();
        if removed {
            self.publish(StorageEvent::removed(key));
        }
        Ok(())
    }

    async fn clear(&self) -> AppResult<()> {
        let keys: Vec<String> = {
            let mut state = self.state.write().await;
            let keys = state.keys().cloned().collect();
            state.clear();
            keys
        };
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

    #[tokio::test]
    async fn test_get_set_roundtrip() {
        let store = MemoryStorage::new();
        assert_eq!(store.get("missing").await.unwrap(), None);

        store.set("key", "value").await.unwrap();
        assert_eq!(store.get("key").await.unwrap(), Some("value".to_string()));

        store.set("key", "other").await.unwrap();
        assert_eq!(store.get("key").await.unwrap(), Some("other".to_string()));
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let store = MemoryStorage::new();
        store.set("key", "value").await.unwrap();
        store.remove("key").await.unwrap();
        store.remove("key").await.unwrap();
        assert_eq!(store.get("key").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_clear_removes_everything() {
        let store = MemoryStorage::new();
        store.set("a", "1").await.unwrap();
        store.set("b", "2").await.unwrap();
        store.clear().await.unwrap();
        assert_eq!(store.get("a").await.unwrap(), None);
        assert_eq!(store.get("b").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_events_fire_on_mutation() {
        let store = MemoryStorage::new();
        let mut events = store.subscribe();

        store.set("key", "value").await.unwrap();
        assert_eq!(events.recv().await.unwrap(), StorageEvent::set("key", "value"));

        store.remove("key").await.unwrap();
        assert_eq!(events.recv().await.unwrap(), StorageEvent::removed("key"));
    }

    #[tokio::test]
    async fn test_no_event_for_removing_absent_key() {
        let store = MemoryStorage::new();
        let mut events = store.subscribe();

        store.remove("never-set").await.unwrap();
        store.set("marker", "x").await.unwrap();

        // First observable event is the marker write
        assert_eq!(events.recv().await.unwrap(), StorageEvent::set("marker", "x"));
    }
}
