//! Repository Trait
//!
//! Interface for session-state persistence. Implementation is in the
//! infrastructure layer; tests inject in-memory or failing stand-ins.

use platform::storage::StorageEvent;
use tokio::sync::broadcast;

use crate::domain::entity::session::{Session, SessionState};
use crate::error::SessionResult;

/// Session state repository trait
///
/// One logical record: the whole session state loads and saves as a
/// unit. `watch` surfaces the underlying storage-change notifications so
/// guards can re-evaluate when another tab mutates the shared state.
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    /// Load the current state; `Guest` when nothing is stored
    async fn load(&self) -> SessionResult<SessionState>;

    /// Persist a session (overwrites any previous one)
    async fn save(&self, session: &Session) -> SessionResult<()>;

    /// Clear all session state; no error if nothing was stored
    async fn clear(&self) -> SessionResult<()>;

    /// Subscribe to storage change notifications
    fn watch(&self) -> broadcast::Receiver<StorageEvent>;
}
