//! Storage key builders for all CrewDesk persisted entries.
//!
//! Centralising key construction prevents typos and makes it easy
//! to find every key the application uses.

use crate::vault::SessionDomain;

/// Prefix applied to all CrewDesk storage keys.
const PREFIX: &str = "crewdesk";

// ── Session keys ───────────────────────────────────────────

/// Storage key for a domain's access token.
pub fn access_token(domain: SessionDomain) -> String {
    format!("{PREFIX}:{}:access_token", domain.segment())
}

/// Storage key for a domain's refresh token.
pub fn refresh_token(domain: SessionDomain) -> String {
    format!("{PREFIX}:{}:refresh_token", domain.segment())
}

/// Storage key for a domain's persisted user profile.
pub fn user(domain: SessionDomain) -> String {
    format!("{PREFIX}:{}:user", domain.segment())
}

/// Storage key for a domain's persisted device record.
pub fn device(domain: SessionDomain) -> String {
    format!("{PREFIX}:{}:device", domain.segment())
}

/// Storage key for a domain's authenticated flag.
pub fn auth_flag(domain: SessionDomain) -> String {
    format!("{PREFIX}:{}:authenticated", domain.segment())
}

// ── Tenant keys ────────────────────────────────────────────

/// Storage key for the active tenant record.
pub fn active_tenant() -> String {
    format!("{PREFIX}:tenant:active")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domains_do_not_collide() {
        assert_eq!(
            access_token(SessionDomain::Workspace),
            "crewdesk:workspace:access_token"
        );
        assert_eq!(
            access_token(SessionDomain::Platform),
            "crewdesk:platform:access_token"
        );
    }
}
