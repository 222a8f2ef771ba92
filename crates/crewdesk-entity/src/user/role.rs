//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles assignable to platform users.
///
/// `SuperAdmin` is the platform-operator role; all other roles belong to
/// tenant (company) users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Company administrator.
    Admin,
    /// Platform operator with cross-tenant access.
    SuperAdmin,
    /// Head of a department.
    DepartmentHead,
    /// Team manager.
    Manager,
    /// Regular team member.
    Member,
    /// HR staff.
    Hr,
    /// HR manager.
    HrManager,
}

impl UserRole {
    /// Check if this role carries company-admin privileges.
    pub fn is_admin_tier(&self) -> bool {
        matches!(self, Self::Admin | Self::SuperAdmin)
    }

    /// Check if this role is the platform-operator role.
    pub fn is_super_admin(&self) -> bool {
        matches!(self, Self::SuperAdmin)
    }

    /// Check if this role belongs to the HR department.
    pub fn is_hr(&self) -> bool {
        matches!(self, Self::Hr | Self::HrManager)
    }

    /// Return the role as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::SuperAdmin => "super_admin",
            Self::DepartmentHead => "department_head",
            Self::Manager => "manager",
            Self::Member => "member",
            Self::Hr => "hr",
            Self::HrManager => "hr_manager",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = crewdesk_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "super_admin" => Ok(Self::SuperAdmin),
            "department_head" => Ok(Self::DepartmentHead),
            "manager" => Ok(Self::Manager),
            "member" => Ok(Self::Member),
            "hr" => Ok(Self::Hr),
            "hr_manager" => Ok(Self::HrManager),
            _ => Err(crewdesk_core::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: admin, super_admin, \
                 department_head, manager, member, hr, hr_manager"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("admin".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert_eq!(
            "HR_MANAGER".parse::<UserRole>().unwrap(),
            UserRole::HrManager
        );
        assert!("unknown_role".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_serde_snake_case() {
        let role: UserRole = serde_json::from_str("\"department_head\"").unwrap();
        assert_eq!(role, UserRole::DepartmentHead);
        assert_eq!(
            serde_json::to_string(&UserRole::SuperAdmin).unwrap(),
            "\"super_admin\""
        );
    }

    #[test]
    fn test_tier_helpers() {
        assert!(UserRole::Admin.is_admin_tier());
        assert!(UserRole::SuperAdmin.is_admin_tier());
        assert!(!UserRole::Member.is_admin_tier());
        assert!(UserRole::HrManager.is_hr());
        assert!(!UserRole::Manager.is_super_admin());
    }
}
