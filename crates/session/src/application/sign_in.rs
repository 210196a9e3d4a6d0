//! Sign In Use Case
//!
//! Authenticates the visitor and persists the session. The backend is
//! simulated: any submission that passes form validation succeeds after
//! the configured fake-network delay.

use std::sync::Arc;

use crate::application::config::SessionConfig;
use crate::domain::entity::session::Session;
use crate::domain::repository::SessionRepository;
use crate::domain::value_object::{
    display_name::DisplayName, email::Email, phone::Phone,
};

/// Sign in input (already validated profile fields)
#[derive(Debug, Clone, Default)]
pub struct SignInInput {
    pub email: Option<Email>,
    pub display_name: Option<DisplayName>,
    pub phone: Option<Phone>,
}

/// Sign in use case
pub struct SignInUseCase<S>
where
    S: SessionRepository,
{
    repo: Arc<S>,
    config: Arc<SessionConfig>,
}

impl<S> SignInUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(repo: Arc<S>, config: Arc<SessionConfig>) -> Self {
        Self { repo, config }
    }

    /// Authenticate and persist.
    ///
    /// Infallible by design: persistence failures are logged and the
    /// in-memory session stands. Calling twice overwrites the whole
    /// profile (last write wins).
    pub async fn execute(&self, input: SignInInput) -> Session {
        // Simulated network round-trip
        self.config.latency.wait().await;

        let session = Session::new(input.email, input.display_name, input.phone);

        if let Err(e) = self.repo.save(&session).await {
            e.log();
            tracing::warn!("Session not persisted; continuing with in-memory session");
        }

        tracing::info!(
            email = session.email.as_ref().map(|e| e.as_str()).unwrap_or(""),
            authenticated_at_ms = session.authenticated_at_ms,
            "Visitor signed in"
        );

        session
    }
}
