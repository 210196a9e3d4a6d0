//! Route Table
//!
//! Owns the literal route lists the classifier matches against. The
//! defaults are the app's fixed route surface; a deployment may extend
//! the table, but [`RouteTable::validate`] must still pass so the guard's
//! redirect rules stay mutually exclusive for every path.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Literal route lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RouteTable {
    /// Public pages, exact match
    pub public_exact: Vec<String>,
    /// Per-item public pages, prefix match
    pub public_prefixes: Vec<String>,
    /// Dashboard area, prefix match
    pub protected_prefixes: Vec<String>,
    /// Legacy aliases for the dashboard area, exact match
    pub protected_exact: Vec<String>,
    /// Auth pages exempt from the authenticated-on-public redirect
    pub auth_exempt: Vec<String>,
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

impl Default for RouteTable {
    fn default() -> Self {
        Self {
            public_exact: strings(&[
                "/",
                "/homepage",
                "/pricing",
                "/help",
                "/contact",
                "/terms",
                "/privacy",
                "/refunds",
                "/explore",
                "/marketplace",
            ]),
            public_prefixes: strings(&["/category/", "/product/", "/p/"]),
            protected_prefixes: strings(&["/dashboard"]),
            protected_exact: strings(&["/creator-dashboard", "/product-management"]),
            auth_exempt: strings(&["/login", "/signup", "/auth-modal"]),
        }
    }
}

impl RouteTable {
    fn matches_public(&self, path: &str) -> bool {
        self.public_exact.iter().any(|p| p == path)
            || self.public_prefixes.iter().any(|p| path.starts_with(p))
    }

    fn matches_protected(&self, path: &str) -> bool {
        self.protected_prefixes.iter().any(|p| path.starts_with(p))
            || self.protected_exact.iter().any(|p| p == path)
    }

    pub(crate) fn is_public(&self, path: &str) -> bool {
        self.matches_public(path)
    }

    pub(crate) fn is_protected(&self, path: &str) -> bool {
        self.matches_protected(path)
    }

    pub(crate) fn is_auth_exempt(&self, path: &str) -> bool {
        self.auth_exempt.iter().any(|p| p == path)
    }

    /// Check that no path can be both public and protected.
    ///
    /// The guard's two redirect rules oscillate if a path matches both
    /// lists, so an extended table must keep them disjoint.
    pub fn validate(&self) -> AppResult<()> {
        for path in &self.public_exact {
            if self.matches_protected(path) {
                return Err(AppError::bad_input(format!(
                    "Public path {path} also matches the protected list"
                )));
            }
        }

        for path in self.protected_exact.iter() {
            if self.matches_public(path) {
                return Err(AppError::bad_input(format!(
                    "Protected path {path} also matches the public list"
                )));
            }
        }

        for public in &self.public_prefixes {
            for protected in &self.protected_prefixes {
                if public.starts_with(protected.as_str())
                    || protected.starts_with(public.as_str())
                {
                    return Err(AppError::bad_input(format!(
                        "Prefixes {public} and {protected} overlap"
                    )));
                }
            }
        }

        for protected in &self.protected_prefixes {
            if let Some(public) = self
                .public_exact
                .iter()
                .find(|p| p.starts_with(protected.as_str()))
            {
                return Err(AppError::bad_input(format!(
                    "Public path {public} falls under protected prefix {protected}"
                )));
            }
        }

        for public in &self.public_prefixes {
            if let Some(protected) = self
                .protected_exact
                .iter()
                .find(|p| p.starts_with(public.as_str()))
            {
                return Err(AppError::bad_input(format!(
                    "Protected path {protected} falls under public prefix {public}"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_is_valid() {
        assert!(RouteTable::default().validate().is_ok());
    }

    #[test]
    fn test_overlapping_exact_path_rejected() {
        let table = RouteTable {
            public_exact: vec!["/dashboard/overview".to_string()],
            ..RouteTable::default()
        };
        assert!(table.validate().is_err());
    }

    #[test]
    fn test_overlapping_prefixes_rejected() {
        let table = RouteTable {
            public_prefixes: vec!["/dashboard/shared/".to_string()],
            ..RouteTable::default()
        };
        assert!(table.validate().is_err());
    }

    #[test]
    fn test_protected_alias_in_public_list_rejected() {
        let mut table = RouteTable::default();
        table.public_exact.push("/creator-dashboard".to_string());
        assert!(table.validate().is_err());
    }
}
