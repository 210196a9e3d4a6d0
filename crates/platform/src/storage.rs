//! Durable Key-Value Storage
//!
//! Interface for the durable, profile-scoped key-value store that backs
//! the session state. Values are plain strings; durability and change
//! notification semantics follow what browser-style local storage offers.

use kernel::error::app_error::AppResult;
use tokio::sync::broadcast;

/// Capacity of the change-notification channel.
///
/// Mutations are rare and user-initiated; a small buffer is enough.
/// A lagged receiver re-reads the store instead of replaying events.
pub const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Change notification fired on every mutation.
///
/// Fire-and-forget: there is no ordering guarantee relative to the
/// subscriber's own operations, so handlers must be idempotent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageEvent {
    /// Key that changed
    pub key: String,
    /// New value; `None` means the key was removed
    pub value: Option<String>,
}

impl StorageEvent {
    /// Event for a key that was written
    pub fn set(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Some(value.into()),
        }
    }

    /// Event for a key that was removed
    pub fn removed(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: None,
        }
    }
}

/// Durable key-value storage trait
///
/// Reads must never panic; implementations degrade to "absent" when the
/// underlying medium is unreadable. Writes are best-effort.
#[trait_variant::make(KeyValueStorage: Send)]
pub trait LocalKeyValueStorage {
    /// Read a value
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Write a value (overwrites)
    async fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Remove a value; no error if absent
    async fn remove(&self, key: &str) -> AppResult<()>;

    /// Remove every value
    async fn clear(&self) -> AppResult<()>;

    /// Subscribe to change notifications
    fn subscribe(&self) -> broadcast::Receiver<StorageEvent>;
}
