//! Navigation Guard
//!
//! Enforces the session/route policy on every navigation: compare the
//! stored login state against the path's classification and either let
//! the screen render or issue a redirect.
//!
//! The guard is a pure function of (state, path) - re-running it is
//! always safe, which is what makes the cross-tab storage notifications
//! a simple "evaluate again" with no reconciliation.

use std::sync::Arc;

use derive_more::Display;
use platform::storage::StorageEvent;
use routing::RouteClassifier;
use tokio::sync::broadcast;

use crate::application::check_session::CheckSessionUseCase;
use crate::domain::repository::SessionRepository;

/// Guard configuration
#[derive(Debug, Clone)]
pub struct GuardConfig {
    /// Where authenticated visitors land when bounced off public pages
    pub dashboard_home: String,
    /// Where guests are sent when they hit the dashboard area
    pub login_path: String,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            dashboard_home: "/dashboard".to_string(),
            login_path: "/login".to_string(),
        }
    }
}

/// Why a redirect was issued
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum RedirectReason {
    /// An authenticated visitor should not sit on a marketing page
    #[display("authenticated visitor on a public page")]
    AuthenticatedOnPublic,
    /// The dashboard area requires a session
    #[display("guest on a protected page")]
    GuestOnProtected,
}

/// A redirect the shell must perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    /// Target path
    pub to: String,
    /// Originally requested path, carried so login can forward back
    pub return_to: Option<String>,
    pub reason: RedirectReason,
}

/// Outcome of a guard evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the requested content unchanged
    Render,
    /// Navigate elsewhere instead
    Redirect(Redirect),
}

impl GuardDecision {
    pub fn is_render(&self) -> bool {
        matches!(self, GuardDecision::Render)
    }

    pub fn redirect(&self) -> Option<&Redirect> {
        match self {
            GuardDecision::Render => None,
            GuardDecision::Redirect(redirect) => Some(redirect),
        }
    }
}

/// Resolve the post-login target from a carried return-to value.
///
/// Only absolute in-app paths are forwarded; anything else (external
/// URLs, protocol-relative tricks, empty values) falls back to the
/// dashboard home.
pub fn resolve_return_to(return_to: Option<&str>, config: &GuardConfig) -> String {
    match return_to {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path.to_string(),
        _ => config.dashboard_home.clone(),
    }
}

/// Navigation guard
pub struct NavigationGuard<S>
where
    S: SessionRepository + Sync + 'static,
{
    repo: Arc<S>,
    classifier: Arc<RouteClassifier>,
    config: Arc<GuardConfig>,
}

impl<S> Clone for NavigationGuard<S>
where
    S: SessionRepository + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            classifier: self.classifier.clone(),
            config: self.config.clone(),
        }
    }
}

impl<S> NavigationGuard<S>
where
    S: SessionRepository + Sync + 'static,
{
    pub fn new(repo: Arc<S>, classifier: Arc<RouteClassifier>, config: Arc<GuardConfig>) -> Self {
        Self {
            repo,
            classifier,
            config,
        }
    }

    pub fn config(&self) -> &GuardConfig {
        &self.config
    }

    /// Run the three checks for `path` and decide.
    ///
    /// Protected outranks public, so dashboard-shaped paths fail closed
    /// even on a misconfigured route table.
    pub async fn evaluate(&self, path: &str) -> GuardDecision {
        let check = CheckSessionUseCase::new(self.repo.clone());
        let authenticated = check.is_authenticated().await;

        let dashboard = self.classifier.is_dashboard_route(path);
        let public = self.classifier.is_public_route(path);

        if dashboard {
            if authenticated {
                return GuardDecision::Render;
            }

            let redirect = Redirect {
                to: self.config.login_path.clone(),
                return_to: Some(path.to_string()),
                reason: RedirectReason::GuestOnProtected,
            };
            tracing::debug!(path = %path, to = %redirect.to, "Guard redirect: {}", redirect.reason);
            return GuardDecision::Redirect(redirect);
        }

        // 認証ページは「公開ページから追い出す」ルールの対象外
        if public && authenticated && !self.classifier.is_auth_route(path) {
            let redirect = Redirect {
                to: self.config.dashboard_home.clone(),
                return_to: None,
                reason: RedirectReason::AuthenticatedOnPublic,
            };
            tracing::debug!(path = %path, to = %redirect.to, "Guard redirect: {}", redirect.reason);
            return GuardDecision::Redirect(redirect);
        }

        GuardDecision::Render
    }

    /// Subscribe to storage change notifications so callers can
    /// re-evaluate when another tab mutates the session
    pub fn changes(&self) -> broadcast::Receiver<StorageEvent> {
        self.repo.watch()
    }
}
