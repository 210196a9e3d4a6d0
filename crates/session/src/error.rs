//! Session Error Types
//!
//! This module provides session-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Session-specific result type alias
pub type SessionResult<T> = Result<T, SessionError>;

/// Session-specific error variants
///
/// The taxonomy is deliberately small: stored state either reads back,
/// or degrades to the guest default. Only form validation is ever shown
/// to the visitor.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Form input failed validation
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Stored session state is unreadable
    #[error("Session state is corrupted: {0}")]
    CorruptedState(String),

    /// Durable storage is unavailable
    #[error("Durable storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SessionError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            SessionError::Validation(_) => ErrorKind::BadInput,
            SessionError::CorruptedState(_) => ErrorKind::Corrupted,
            SessionError::StorageUnavailable(_) => ErrorKind::Storage,
            SessionError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            SessionError::StorageUnavailable(msg) => {
                tracing::warn!(message = %msg, "Session storage unavailable");
            }
            SessionError::CorruptedState(msg) => {
                tracing::warn!(message = %msg, "Session state corrupted");
            }
            SessionError::Internal(msg) => {
                tracing::error!(message = %msg, "Session internal error");
            }
            SessionError::Validation(_) => {
                tracing::debug!(error = %self, "Session validation error");
            }
        }
    }
}

impl From<AppError> for SessionError {
    fn from(err: AppError) -> Self {
        match err.kind() {
            ErrorKind::BadInput => SessionError::Validation(err.message().to_string()),
            ErrorKind::Storage | ErrorKind::NotFound => {
                SessionError::StorageUnavailable(err.message().to_string())
            }
            ErrorKind::Corrupted => SessionError::CorruptedState(err.message().to_string()),
            _ => SessionError::Internal(err.to_string()),
        }
    }
}
