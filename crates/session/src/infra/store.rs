//! Storage-Backed Repository
//!
//! Maps the session state onto the durable key-value layout. The key
//! names and the `"true"` flag literal are an external interface shared
//! with every past deployment of the app - they must not drift.

use std::sync::Arc;

use platform::storage::{KeyValueStorage, StorageEvent};
use tokio::sync::broadcast;

use crate::domain::entity::session::{Session, SessionState};
use crate::domain::repository::SessionRepository;
use crate::domain::value_object::{
    display_name::DisplayName, email::Email, phone::Phone,
};
use crate::error::SessionResult;

/// Authentication flag; authenticated iff the value is exactly `"true"`
pub const KEY_AUTHENTICATED: &str = "isAuthenticated";
/// Profile email, present only when authenticated
pub const KEY_EMAIL: &str = "userEmail";
/// Profile display name, present only when authenticated
pub const KEY_NAME: &str = "userName";
/// Profile phone, present only when authenticated
pub const KEY_PHONE: &str = "userPhone";
/// String-encoded epoch millis of the last sign-in
pub const KEY_TIMESTAMP: &str = "authTimestamp";

/// The flag value meaning "authenticated"
pub const AUTHENTICATED: &str = "true";

/// Every key this repository owns
pub const SESSION_KEYS: [&str; 5] = [
    KEY_AUTHENTICATED,
    KEY_EMAIL,
    KEY_NAME,
    KEY_PHONE,
    KEY_TIMESTAMP,
];

/// True iff `key` belongs to the session layout (cross-tab filters)
pub fn is_session_key(key: &str) -> bool {
    SESSION_KEYS.contains(&key)
}

/// Session repository over any durable key-value storage
pub struct StorageSessionRepository<K>
where
    K: KeyValueStorage + Sync,
{
    storage: Arc<K>,
}

impl<K> Clone for StorageSessionRepository<K>
where
    K: KeyValueStorage + Sync,
{
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
        }
    }
}

impl<K> StorageSessionRepository<K>
where
    K: KeyValueStorage + Sync,
{
    pub fn new(storage: Arc<K>) -> Self {
        Self { storage }
    }

    async fn read_timestamp(&self) -> i64 {
        let raw = match self.storage.get(KEY_TIMESTAMP).await {
            Ok(raw) => raw,
            Err(_) => None,
        };

        match raw {
            None => 0,
            Some(raw) => match raw.parse::<i64>() {
                Ok(ms) => ms,
                Err(e) => {
                    // Corrupt timestamp does not invalidate the session
                    tracing::warn!(raw = %raw, error = %e, "Stored auth timestamp unreadable");
                    0
                }
            },
        }
    }

    async fn write_optional(&self, key: &str, value: Option<&str>) -> SessionResult<()> {
        match value {
            Some(value) => self.storage.set(key, value).await?,
            None => self.storage.remove(key).await?,
        }
        Ok(())
    }
}

impl<K> SessionRepository for StorageSessionRepository<K>
where
    K: KeyValueStorage + Sync,
{
    async fn load(&self) -> SessionResult<SessionState> {
        // The flag must be exactly "true"; anything else reads as guest
        let flag = self.storage.get(KEY_AUTHENTICATED).await?;
        if flag.as_deref() != Some(AUTHENTICATED) {
            return Ok(SessionState::Guest);
        }

        let email = self.storage.get(KEY_EMAIL).await?.map(Email::from_stored);
        let display_name = self
            .storage
            .get(KEY_NAME)
            .await?
            .map(DisplayName::from_stored);
        let phone = self.storage.get(KEY_PHONE).await?.map(Phone::from_stored);
        let authenticated_at_ms = self.read_timestamp().await;

        Ok(SessionState::Active(Session::from_stored(
            email,
            display_name,
            phone,
            authenticated_at_ms,
        )))
    }

    async fn save(&self, session: &Session) -> SessionResult<()> {
        self.storage.set(KEY_AUTHENTICATED, AUTHENTICATED).await?;
        self.storage
            .set(KEY_TIMESTAMP, &session.authenticated_at_ms.to_string())
            .await?;

        // Absent fields are removed so re-authentication is last-write-wins
        self.write_optional(KEY_EMAIL, session.email.as_ref().map(|e| e.as_str()))
            .await?;
        self.write_optional(KEY_NAME, session.display_name.as_ref().map(|n| n.as_str()))
            .await?;
        self.write_optional(KEY_PHONE, session.phone.as_ref().map(|p| p.as_str()))
            .await?;

        Ok(())
    }

    async fn clear(&self) -> SessionResult<()> {
        for key in SESSION_KEYS {
            self.storage.remove(key).await?;
        }
        Ok(())
    }

    fn watch(&self) -> broadcast::Receiver<StorageEvent> {
        self.storage.subscribe()
    }
}
