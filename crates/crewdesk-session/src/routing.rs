//! Dashboard routing table.
//!
//! A pure decision function mirroring an explicit precedence table.
//! The order matters: the platform-owner check runs before the generic
//! admin-tier rule, and anything unrecognized lands on the admin view.

use crewdesk_entity::UserRole;

/// The designated platform-owner login. Only this super-admin account
/// is routed to the cross-tenant operations console.
pub const PLATFORM_OWNER_EMAIL: &str = "admin@demo.com";

/// The dashboard entry components a login can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DashboardVariant {
    /// Cross-tenant platform operations console.
    SaasSuperAdmin,
    /// Company administration dashboard (also the fallback).
    Admin,
    /// Department-head dashboard.
    DepartmentHead,
    /// Manager dashboard.
    Manager,
    /// Member dashboard.
    Member,
    /// HR dashboard.
    Hr,
    /// HR-manager dashboard.
    HrManager,
}

/// Route a typed role + email to its dashboard. First match wins.
pub fn route_for_role(role: UserRole, email: &str) -> DashboardVariant {
    if role == UserRole::SuperAdmin && email.eq_ignore_ascii_case(PLATFORM_OWNER_EMAIL) {
        return DashboardVariant::SaasSuperAdmin;
    }
    match role {
        UserRole::Admin | UserRole::SuperAdmin => DashboardVariant::Admin,
        UserRole::DepartmentHead => DashboardVariant::DepartmentHead,
        UserRole::Manager => DashboardVariant::Manager,
        UserRole::Member => DashboardVariant::Member,
        UserRole::Hr => DashboardVariant::Hr,
        UserRole::HrManager => DashboardVariant::HrManager,
    }
}

/// Route an untyped role string, e.g. straight from token claims.
///
/// An unrecognized role gets the default admin view, an explicit
/// design choice rather than an error path.
pub fn route_for_claims(role: &str, email: &str) -> DashboardVariant {
    match role.parse::<UserRole>() {
        Ok(role) => route_for_role(role, email),
        Err(_) => DashboardVariant::Admin,
    }
}
