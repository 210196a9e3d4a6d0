//! Check Session Use Case
//!
//! Reads the current login state. Every failure path degrades to the
//! guest default - a storage fault must never crash navigation.

use std::sync::Arc;

use crate::domain::entity::session::{Session, SessionState};
use crate::domain::repository::SessionRepository;

/// Profile fields surfaced to screens (any may be absent)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserData {
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub phone: Option<String>,
    pub authenticated_at_ms: i64,
}

impl From<&Session> for UserData {
    fn from(session: &Session) -> Self {
        Self {
            email: session.email.as_ref().map(|e| e.as_str().to_string()),
            display_name: session.display_name.as_ref().map(|n| n.as_str().to_string()),
            phone: session.phone.as_ref().map(|p| p.as_str().to_string()),
            authenticated_at_ms: session.authenticated_at_ms,
        }
    }
}

/// Check session use case
pub struct CheckSessionUseCase<S>
where
    S: SessionRepository,
{
    repo: Arc<S>,
}

impl<S> CheckSessionUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(repo: Arc<S>) -> Self {
        Self { repo }
    }

    /// Load the current state; any repository error reads as `Guest`
    pub async fn state(&self) -> SessionState {
        match self.repo.load().await {
            Ok(state) => state,
            Err(e) => {
                e.log();
                tracing::warn!("Treating unreadable session state as guest");
                SessionState::Guest
            }
        }
    }

    /// True iff an authenticated session is stored
    pub async fn is_authenticated(&self) -> bool {
        self.state().await.is_authenticated()
    }

    /// Profile data; `None` unless authenticated
    pub async fn user_data(&self) -> Option<UserData> {
        self.state().await.session().map(UserData::from)
    }
}
