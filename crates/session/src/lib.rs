//! Session Module - Client-Side Session and Navigation Policy
//!
//! Clean Architecture structure:
//! - `domain/` - Session entity, value objects, repository trait
//! - `application/` - Use cases and configuration
//! - `infra/` - Storage-backed repository (durable key-value layout)
//! - `presentation/` - Form DTOs and the navigation guard
//!
//! ## Features
//! - Simulated sign-in/sign-up (any credentials accepted, fake latency)
//! - Durable session state surviving restarts (browser-storage layout)
//! - Navigation guard: render-or-redirect policy per (session, path)
//! - Cross-tab change notifications via storage events
//!
//! ## Behavior Model
//! Two states, `Guest` and `Active`; sign-in and sign-out are the only
//! transitions. The guard is a pure function of (state, path) evaluated
//! on every navigation, never a stored state machine. Reads degrade to
//! `Guest` on any storage fault; nothing here can crash navigation.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::SessionConfig;
pub use application::{CheckSessionUseCase, SignInInput, SignInUseCase, SignOutUseCase, UserData};
pub use domain::entity::session::{Session, SessionState};
pub use error::{SessionError, SessionResult};
pub use infra::store::StorageSessionRepository;
pub use presentation::guard::{GuardConfig, GuardDecision, NavigationGuard, Redirect};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod store {
    pub use crate::infra::store::*;
}

pub mod guard {
    pub use crate::presentation::guard::*;
}
