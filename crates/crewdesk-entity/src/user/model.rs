//! User entity model.

use serde::{Deserialize, Serialize};

use super::role::UserRole;

/// A platform user as returned by the backend.
///
/// IDs are opaque backend-issued strings. The `name` field may be absent
/// on the wire; [`User::display_name`] derives one when needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier.
    pub id: String,
    /// Email address used for login.
    pub email: String,
    /// Full display name, when the backend provides one.
    #[serde(default)]
    pub name: Option<String>,
    /// Given name.
    #[serde(default)]
    pub first_name: Option<String>,
    /// Family name.
    #[serde(default)]
    pub last_name: Option<String>,
    /// Assigned role.
    pub role: UserRole,
    /// Whether the account is active.
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// The department this user belongs to.
    #[serde(default)]
    pub department_id: Option<String>,
    /// The company (tenant) this user belongs to.
    #[serde(default)]
    pub company_id: Option<String>,
    /// Avatar image URL.
    #[serde(default)]
    pub avatar: Option<String>,
}

impl User {
    /// Derive the best available display name.
    ///
    /// Preference order: explicit `name`, then `first_name last_name`
    /// (either half alone is accepted), then the email local-part.
    pub fn display_name(&self) -> String {
        if let Some(name) = self.name.as_deref() {
            if !name.trim().is_empty() {
                return name.trim().to_string();
            }
        }

        let joined = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if !joined.is_empty() {
            return joined;
        }

        self.email
            .split('@')
            .next()
            .unwrap_or(&self.email)
            .to_string()
    }

    /// Return a copy with `name` filled in from [`User::display_name`].
    pub fn normalized(mut self) -> Self {
        self.name = Some(self.display_name());
        self
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_user() -> User {
        User {
            id: "u-42".to_string(),
            email: "jane.doe@acme.test".to_string(),
            name: None,
            first_name: None,
            last_name: None,
            role: UserRole::Member,
            is_active: true,
            department_id: None,
            company_id: None,
            avatar: None,
        }
    }

    #[test]
    fn test_display_name_prefers_explicit_name() {
        let user = User {
            name: Some("Jane D".to_string()),
            first_name: Some("Jane".to_string()),
            ..base_user()
        };
        assert_eq!(user.display_name(), "Jane D");
    }

    #[test]
    fn test_display_name_joins_first_and_last() {
        let user = User {
            first_name: Some("Jane".to_string()),
            last_name: Some("Doe".to_string()),
            ..base_user()
        };
        assert_eq!(user.display_name(), "Jane Doe");
    }

    #[test]
    fn test_display_name_accepts_single_half() {
        let user = User {
            last_name: Some("Doe".to_string()),
            ..base_user()
        };
        assert_eq!(user.display_name(), "Doe");
    }

    #[test]
    fn test_display_name_falls_back_to_email_local_part() {
        assert_eq!(base_user().display_name(), "jane.doe");
    }

    #[test]
    fn test_normalized_fills_name() {
        let user = base_user().normalized();
        assert_eq!(user.name.as_deref(), Some("jane.doe"));
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let json = r#"{
            "id": "u-1",
            "email": "a@b.co",
            "firstName": "Ada",
            "lastName": "Byron",
            "role": "hr_manager",
            "isActive": false,
            "departmentId": "d-9"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.first_name.as_deref(), Some("Ada"));
        assert_eq!(user.role, UserRole::HrManager);
        assert!(!user.is_active);
        assert_eq!(user.department_id.as_deref(), Some("d-9"));
    }
}
