//! Route Class
//!
//! Derived, stateless categorization of a navigation path.

use derive_more::Display;
use serde::Serialize;

/// Category a path falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteClass {
    /// Marketing/info pages and per-item public pages
    #[display("public")]
    Public,
    /// Dashboard area; requires an authenticated session
    #[display("protected")]
    Protected,
    /// Neither list matched (e.g. the auth pages themselves)
    #[display("neutral")]
    Neutral,
}

impl RouteClass {
    pub fn is_public(&self) -> bool {
        matches!(self, RouteClass::Public)
    }

    pub fn is_protected(&self) -> bool {
        matches!(self, RouteClass::Protected)
    }
}
