//! Backend endpoint paths per session domain, and URL resolution.

use crewdesk_store::SessionDomain;

/// Login endpoint for a domain.
pub fn login_path(domain: SessionDomain) -> &'static str {
    match domain {
        SessionDomain::Workspace => "/auth/login",
        SessionDomain::Platform => "/saas/auth/login",
    }
}

/// Logout endpoint for a domain.
pub fn logout_path(domain: SessionDomain) -> &'static str {
    match domain {
        SessionDomain::Workspace => "/auth/logout",
        SessionDomain::Platform => "/saas/auth/logout",
    }
}

/// Token refresh endpoint for a domain.
pub fn refresh_path(domain: SessionDomain) -> &'static str {
    match domain {
        SessionDomain::Workspace => "/auth/refresh",
        SessionDomain::Platform => "/saas/auth/refresh",
    }
}

/// Workspace lookup endpoint (tenant resolution by subdomain).
pub fn workspace_lookup_path() -> &'static str {
    "/workspaces/lookup"
}

/// Resolve `path` against `base_url`.
///
/// Absolute URLs pass through untouched; relative paths are joined to
/// the base with exactly one separating slash.
pub fn resolve(base_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
