//! Unit tests for the routing crate
//! Exercises the full fixed route surface against the classifier.

#[cfg(test)]
mod route_surface_tests {
    use crate::{RouteClass, RouteClassifier};

    const PUBLIC_EXACT: &[&str] = &[
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
    ];

    #[test]
    fn test_every_public_exact_path_is_public() {
        let classifier = RouteClassifier::default();
        for path in PUBLIC_EXACT {
            assert!(
                classifier.is_public_route(path),
                "expected {path} to be public"
            );
            assert_eq!(classifier.classify(path), RouteClass::Public);
        }
    }

    #[test]
    fn test_per_item_prefixes_are_public() {
        let classifier = RouteClassifier::default();
        for path in [
            "/category/templates",
            "/category/icons/free",
            "/product/ebook-101",
            "/p/abc123",
        ] {
            assert!(
                classifier.is_public_route(path),
                "expected {path} to be public"
            );
        }
    }

    #[test]
    fn test_dashboard_paths_are_protected() {
        let classifier = RouteClassifier::default();
        for path in [
            "/dashboard",
            "/dashboard/",
            "/dashboard/products",
            "/dashboard/settings/profile",
            "/creator-dashboard",
            "/product-management",
        ] {
            assert!(
                classifier.is_dashboard_route(path),
                "expected {path} to be protected"
            );
            assert_eq!(classifier.classify(path), RouteClass::Protected);
        }
    }

    #[test]
    fn test_public_and_protected_are_independent() {
        let classifier = RouteClassifier::default();
        for path in PUBLIC_EXACT {
            assert!(!classifier.is_dashboard_route(path));
        }
        assert!(!classifier.is_public_route("/dashboard"));
        assert!(!classifier.is_public_route("/creator-dashboard"));
    }

    #[test]
    fn test_unlisted_paths_are_neutral() {
        let classifier = RouteClassifier::default();
        for path in ["/login", "/signup", "/auth-modal", "/about-nothing", ""] {
            assert_eq!(
                classifier.classify(path),
                RouteClass::Neutral,
                "expected {path:?} to be neutral"
            );
        }
    }

    #[test]
    fn test_query_strings_are_not_stripped() {
        // The caller is responsible for handing over a bare path
        let classifier = RouteClassifier::default();
        assert!(!classifier.is_public_route("/pricing?plan=pro"));
        // Prefix matching still catches per-item pages with queries
        assert!(classifier.is_public_route("/product/ebook?ref=home"));
        assert!(classifier.is_dashboard_route("/dashboard?tab=sales"));
    }
}
