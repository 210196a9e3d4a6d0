//! Email Value Object
//!
//! Represents a profile email address. Validation is what a signup form
//! needs, nothing more - the simulated backend never sends mail, so no
//! verification step exists.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Maximum email length (per RFC 5321)
const EMAIL_MAX_LENGTH: usize = 254;

/// Email address value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    /// Create a new email with validation
    pub fn new(email: impl Into<String>) -> AppResult<Self> {
        let email = email.into().trim().to_lowercase();

        if email.is_empty() {
            return Err(AppError::bad_input("Email cannot be empty"));
        }

        if email.len() > EMAIL_MAX_LENGTH {
            return Err(AppError::bad_input(format!(
                "Email must be at most {} characters",
                EMAIL_MAX_LENGTH
            )));
        }

        let Some((local, domain)) = email.split_once('@') else {
            return Err(AppError::bad_input("Email must contain @"));
        };

        if local.is_empty() || local.len() > 64 {
            return Err(AppError::bad_input("Invalid email format"));
        }

        if domain.is_empty() || !domain.contains('.') {
            return Err(AppError::bad_input("Invalid email domain"));
        }

        if !domain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
            || domain.starts_with(['.', '-'])
            || domain.ends_with(['.', '-'])
        {
            return Err(AppError::bad_input("Invalid email domain"));
        }

        Ok(Self(email))
    }

    /// Rebuild from a stored value without re-validating.
    ///
    /// Reads from durable storage must never fail; shape problems in
    /// stored data degrade elsewhere, they do not throw here.
    pub fn from_stored(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    /// Get the email as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Email {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        Email::new(s)
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
