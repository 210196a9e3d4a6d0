//! Phone Value Object
//!
//! Optional profile phone number. Loose validation: separators are
//! stripped, an international prefix is allowed, and only digit count is
//! checked - the simulated backend never dials anything.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Digit count bounds (after separator stripping)
const PHONE_MIN_DIGITS: usize = 7;
const PHONE_MAX_DIGITS: usize = 15;

/// Phone number value object, stored in canonical form (`+` and digits)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Phone(String);

impl Phone {
    /// Create a new phone number with validation
    pub fn new(phone: impl Into<String>) -> AppResult<Self> {
        let raw = phone.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(AppError::bad_input("Phone number cannot be empty"));
        }

        let international = trimmed.starts_with('+');

        let digits: String = trimmed
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect();

        let separators_only = trimmed
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | ' ' | '-' | '.' | '(' | ')'));
        if !separators_only {
            return Err(AppError::bad_input("Phone number contains invalid characters"));
        }

        if digits.len() < PHONE_MIN_DIGITS || digits.len() > PHONE_MAX_DIGITS {
            return Err(AppError::bad_input(format!(
                "Phone number must have {} to {} digits",
                PHONE_MIN_DIGITS, PHONE_MAX_DIGITS
            )));
        }

        let canonical = if international {
            format!("+{digits}")
        } else {
            digits
        };

        Ok(Self(canonical))
    }

    /// Rebuild from a stored value without re-validating
    pub fn from_stored(phone: impl Into<String>) -> Self {
        Self(phone.into())
    }

    /// Get the phone number as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Phone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_valid() {
        assert!(Phone::new("5551234567").is_ok());
        assert!(Phone::new("+81 90-1234-5678").is_ok());
        assert!(Phone::new("(555) 123.4567").is_ok());
    }

    #[test]
    fn test_phone_canonical_form() {
        let phone = Phone::new("+81 90-1234-5678").unwrap();
        assert_eq!(phone.as_str(), "+819012345678");

        let phone = Phone::new("(555) 123-4567").unwrap();
        assert_eq!(phone.as_str(), "5551234567");
    }

    #[test]
    fn test_phone_invalid() {
        assert!(Phone::new("").is_err());
        assert!(Phone::new("12345").is_err()); // too short
        assert!(Phone::new("1234567890123456").is_err()); // too long
        assert!(Phone::new("call-me-maybe").is_err());
    }
}
