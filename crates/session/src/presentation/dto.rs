//! Form DTOs (Data Transfer Objects)
//!
//! Shapes submitted by the login/signup screens and the status shape
//! screens read back. Field names follow the persisted camelCase layout.

use serde::{Deserialize, Serialize};

use crate::application::check_session::UserData;
use crate::application::sign_in::SignInInput;
use crate::domain::value_object::{
    display_name::DisplayName, email::Email, phone::Phone,
};
use crate::error::{SessionError, SessionResult};

// ============================================================================
// Login
// ============================================================================

/// Login form submission
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    /// Path to forward to after success (set by the guard's redirect)
    #[serde(default)]
    pub return_to: Option<String>,
}

impl LoginRequest {
    /// Validate the form and produce sign-in input.
    ///
    /// The backend is simulated: the password is only checked non-empty,
    /// never verified against anything.
    pub fn validate(&self) -> SessionResult<SignInInput> {
        if self.password.trim().is_empty() {
            return Err(SessionError::Validation(
                "Password cannot be empty".to_string(),
            ));
        }

        let email = Email::new(&self.email)
            .map_err(|e| SessionError::Validation(e.message().to_string()))?;

        Ok(SignInInput {
            email: Some(email),
            display_name: None,
            phone: None,
        })
    }
}

// ============================================================================
// Signup
// ============================================================================

/// Signup form submission
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub password: String,
}

impl SignupRequest {
    /// Validate the form and produce sign-in input
    pub fn validate(&self) -> SessionResult<SignInInput> {
        if self.password.trim().is_empty() {
            return Err(SessionError::Validation(
                "Password cannot be empty".to_string(),
            ));
        }

        let display_name = DisplayName::new(&self.name)
            .map_err(|e| SessionError::Validation(e.message().to_string()))?;

        let email = Email::new(&self.email)
            .map_err(|e| SessionError::Validation(e.message().to_string()))?;

        let phone = match &self.phone {
            Some(raw) if !raw.trim().is_empty() => Some(
                Phone::new(raw)
                    .map_err(|e| SessionError::Validation(e.message().to_string()))?,
            ),
            _ => None,
        };

        Ok(SignInInput {
            email: Some(email),
            display_name: Some(display_name),
            phone,
        })
    }
}

// ============================================================================
// Session Status
// ============================================================================

/// Session status read by screens
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatusResponse {
    pub authenticated: bool,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub phone: Option<String>,
    pub authenticated_at_ms: Option<i64>,
}

impl SessionStatusResponse {
    /// Guest status (no profile data)
    pub fn guest() -> Self {
        Self {
            authenticated: false,
            email: None,
            display_name: None,
            phone: None,
            authenticated_at_ms: None,
        }
    }
}

impl From<Option<UserData>> for SessionStatusResponse {
    fn from(data: Option<UserData>) -> Self {
        match data {
            None => Self::guest(),
            Some(data) => Self {
                authenticated: true,
                email: data.email,
                display_name: data.display_name,
                phone: data.phone,
                authenticated_at_ms: Some(data.authenticated_at_ms),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_accepts_any_password() {
        let req = LoginRequest {
            email: "creator@example.com".to_string(),
            password: "anything at all".to_string(),
            return_to: None,
        };
        let input = req.validate().unwrap();
        assert_eq!(input.email.unwrap().as_str(), "creator@example.com");
        assert!(input.display_name.is_none());
    }

    #[test]
    fn test_login_rejects_empty_password_and_bad_email() {
        let req = LoginRequest {
            email: "creator@example.com".to_string(),
            password: "   ".to_string(),
            return_to: None,
        };
        assert!(matches!(
            req.validate(),
            Err(SessionError::Validation(_))
        ));

        let req = LoginRequest {
            email: "not-an-email".to_string(),
            password: "x".to_string(),
            return_to: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_signup_collects_full_profile() {
        let req = SignupRequest {
            name: "  Alice  ".to_string(),
            email: "Alice@Example.com".to_string(),
            phone: Some("+1 (555) 123-4567".to_string()),
            password: "pw".to_string(),
        };
        let input = req.validate().unwrap();
        assert_eq!(input.display_name.unwrap().as_str(), "Alice");
        assert_eq!(input.email.unwrap().as_str(), "alice@example.com");
        assert_eq!(input.phone.unwrap().as_str(), "+15551234567");
    }

    #[test]
    fn test_signup_blank_phone_is_none() {
        let req = SignupRequest {
            name: "Alice".to_string(),
            email: "a@b.com".to_string(),
            phone: Some("  ".to_string()),
            password: "pw".to_string(),
        };
        assert!(req.validate().unwrap().phone.is_none());
    }

    #[test]
    fn test_status_from_user_data() {
        let status = SessionStatusResponse::from(None);
        assert!(!status.authenticated);
        assert!(status.email.is_none());

        let data = UserData {
            email: Some("a@b.com".to_string()),
            display_name: None,
            phone: None,
            authenticated_at_ms: 42,
        };
        let status = SessionStatusResponse::from(Some(data));
        assert!(status.authenticated);
        assert_eq!(status.authenticated_at_ms, Some(42));
    }
}
