//! Legacy-path redirects.
//!
//! Search engines still hold URLs from two site generations ago. This layer
//! answers them with a single-hop 301 before routing: an exact table of
//! known legacy paths (case-insensitive fallback), a rule collapsing old
//! per-item portfolio pages, and trailing-slash normalization. API paths
//! pass through untouched.

use axum::extract::Request;
use axum::http::{header, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

/// Known legacy path → canonical path.
const REDIRECT_TABLE: &[(&str, &str)] = &[
    // Indexed mismatches from the previous site
    ("/about-us", "/about"),
    ("/our-team", "/about"),
    ("/our-services", "/services"),
    ("/contact-us", "/contact"),
    ("/our-work", "/portfolio"),
    ("/news", "/blog"),
    ("/articles", "/blog"),
    // Retired service slugs
    ("/services/software-development", "/services/custom-software-development"),
    ("/services/cloud-migration", "/services/cloud-architecture-migration"),
    ("/services/cyber-security", "/services/security-engineering"),
    ("/services/machine-learning", "/services/applied-ai"),
    // Front-door variations
    ("/home", "/"),
    ("/index.html", "/"),
    ("/index.php", "/"),
    ("/default.html", "/"),
];

/// The active redirect table, for admin tooling.
pub fn redirect_rules() -> &'static [(&'static str, &'static str)] {
    REDIRECT_TABLE
}

/// Compute the canonical target for a request path, or `None` when the
/// path should be served as-is. Table hits on a trailing-slash variant
/// resolve in one hop.
pub fn redirect_target(path: &str) -> Option<String> {
    if path == "/api" || path.starts_with("/api/") {
        return None;
    }

    let trimmed = if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    };

    let table_hit = REDIRECT_TABLE
        .iter()
        .find(|(from, _)| *from == trimmed)
        .or_else(|| {
            let lower = trimmed.to_ascii_lowercase();
            REDIRECT_TABLE.iter().find(|(from, _)| *from == lower)
        });
    if let Some((_, to)) = table_hit {
        return Some((*to).to_string());
    }

    // Old per-item portfolio pages collapsed into the portfolio index.
    if let Some(rest) = trimmed.strip_prefix("/portfolio/") {
        if !rest.is_empty() && !rest.contains('/') {
            return Some("/portfolio".to_string());
        }
    }

    if trimmed != path {
        return Some(trimmed.to_string());
    }

    None
}

/// Middleware serving 301s for legacy paths.
pub async fn redirect_legacy_paths(request: Request, next: Next) -> Response {
    if let Some(target) = redirect_target(request.uri().path()) {
        tracing::debug!(from = %request.uri().path(), to = %target, "legacy path redirect");
        return (
            StatusCode::MOVED_PERMANENTLY,
            [(header::LOCATION, target)],
        )
            .into_response();
    }
    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_table_match() {
        assert_eq!(redirect_target("/about-us").as_deref(), Some("/about"));
        assert_eq!(redirect_target("/news").as_deref(), Some("/blog"));
    }

    #[test]
    fn case_insensitive_fallback() {
        assert_eq!(redirect_target("/About-Us").as_deref(), Some("/about"));
    }

    #[test]
    fn trailing_slash_variant_resolves_in_one_hop() {
        assert_eq!(redirect_target("/about-us/").as_deref(), Some("/about"));
    }

    #[test]
    fn retired_service_slug() {
        assert_eq!(
            redirect_target("/services/cloud-migration").as_deref(),
            Some("/services/cloud-architecture-migration")
        );
    }

    #[test]
    fn portfolio_items_collapse() {
        assert_eq!(
            redirect_target("/portfolio/old-case-study").as_deref(),
            Some("/portfolio")
        );
        assert_eq!(redirect_target("/portfolio"), None);
        // Deeper paths are not portfolio items.
        assert_eq!(redirect_target("/portfolio/a/b"), None);
    }

    #[test]
    fn bare_trailing_slash_normalizes() {
        assert_eq!(redirect_target("/services/").as_deref(), Some("/services"));
        assert_eq!(redirect_target("/"), None);
    }

    #[test]
    fn canonical_paths_pass_through() {
        assert_eq!(redirect_target("/about"), None);
        assert_eq!(redirect_target("/services"), None);
        assert_eq!(redirect_target("/blog"), None);
    }

    #[test]
    fn api_paths_never_redirect() {
        assert_eq!(redirect_target("/api/blog-posts/"), None);
        assert_eq!(redirect_target("/api"), None);
    }
}
