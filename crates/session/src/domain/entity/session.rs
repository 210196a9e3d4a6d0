//! Session Entity
//!
//! Represents the current visitor's login state. A `Session` only exists
//! while the visitor is treated as authenticated; profile fields carry no
//! meaning outside of one.

use chrono::Utc;

use crate::domain::value_object::{
    display_name::DisplayName, email::Email, phone::Phone,
};

/// Session entity
///
/// The stored timestamp records when the visitor authenticated. It is
/// written and surfaced for display, never checked: sessions do not
/// expire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Profile email, if the visitor provided one
    pub email: Option<Email>,
    /// Profile display name
    pub display_name: Option<DisplayName>,
    /// Profile phone number
    pub phone: Option<Phone>,
    /// When authenticate() ran (Unix timestamp ms)
    pub authenticated_at_ms: i64,
}

impl Session {
    /// Create a new session stamped with the current time
    pub fn new(
        email: Option<Email>,
        display_name: Option<DisplayName>,
        phone: Option<Phone>,
    ) -> Self {
        Self {
            email,
            display_name,
            phone,
            authenticated_at_ms: Utc::now().timestamp_millis(),
        }
    }

    /// Rebuild a session from stored fields
    pub fn from_stored(
        email: Option<Email>,
        display_name: Option<DisplayName>,
        phone: Option<Phone>,
        authenticated_at_ms: i64,
    ) -> Self {
        Self {
            email,
            display_name,
            phone,
            authenticated_at_ms,
        }
    }

    /// Milliseconds since authentication (display only)
    pub fn age_ms(&self) -> i64 {
        (Utc::now().timestamp_millis() - self.authenticated_at_ms).max(0)
    }
}

/// The visitor's login state
///
/// Two states, two transitions: sign-in (`Guest` → `Active`) and
/// sign-out (`Active` → `Guest`). Everything downstream is a pure
/// function of this state plus the current path.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Nobody is signed in
    #[default]
    Guest,
    /// An authenticated session exists
    Active(Session),
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Active(_))
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            SessionState::Guest => None,
            SessionState::Active(session) => Some(session),
        }
    }

    pub fn into_session(self) -> Option<Session> {
        match self {
            SessionState::Guest => None,
            SessionState::Active(session) => Some(session),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_stamped() {
        let before = Utc::now().timestamp_millis();
        let session = Session::new(None, None, None);
        let after = Utc::now().timestamp_millis();

        assert!(session.authenticated_at_ms >= before);
        assert!(session.authenticated_at_ms <= after);
    }

    #[test]
    fn test_default_state_is_guest() {
        let state = SessionState::default();
        assert!(!state.is_authenticated());
        assert!(state.session().is_none());
    }

    #[test]
    fn test_active_state_exposes_session() {
        let session = Session::new(Some(Email::new("a@b.com").unwrap()), None, None);
        let state = SessionState::Active(session.clone());
        assert!(state.is_authenticated());
        assert_eq!(state.session(), Some(&session));
        assert_eq!(state.into_session(), Some(session));
    }
}
