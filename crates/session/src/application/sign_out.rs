//! Sign Out Use Case
//!
//! Clears the persisted session. Instant: unlike sign-in there is no
//! fake network call around a client-side clear.

use std::sync::Arc;

use crate::domain::repository::SessionRepository;

/// Sign out use case
pub struct SignOutUseCase<S>
where
    S: SessionRepository,
{
    repo: Arc<S>,
}

impl<S> SignOutUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(repo: Arc<S>) -> Self {
        Self { repo }
    }

    /// Clear all session state. No error when nothing was stored, and
    /// storage failures degrade to a warning.
    pub async fn execute(&self) {
        if let Err(e) = self.repo.clear().await {
            e.log();
            tracing::warn!("Session state not cleared in storage");
        }

        tracing::info!("Visitor signed out");
    }
}
