//! Role vocabularies and the mapping between them.
//!
//! The backend and the UI name the same permission levels almost
//! identically. The backend abbreviates `department_head` to `dept_head`
//! and has no separate `admin` role, so UI `admin` is sent as `super_admin`.
//! Role strings that match neither vocabulary pass through untouched.

use serde::{Deserialize, Serialize};
use crate::error::AccessError;

/// Backend encoding of [`UiRole::DepartmentHead`].
pub const API_DEPARTMENT_HEAD: &str = "dept_head";

/// Every role string the backend issues.
pub const API_ROLES: &[&str] = &[
    "super_admin",
    API_DEPARTMENT_HEAD,
    "manager",
    "member",
    "hr",
    "hr_manager",
    "person",
];

/// Permission level as seen by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UiRole {
    /// Platform owner
    SuperAdmin,
    /// Tenant administrator
    Admin,
    /// Head of a department
    DepartmentHead,
    /// Team manager
    Manager,
    /// Regular employee
    Member,
    /// Human resources staff
    Hr,
    /// Human resources lead
    HrManager,
    /// Individual account outside any team
    Person,
}

impl UiRole {
    /// All UI roles.
    pub const ALL: [UiRole; 8] = [
        UiRole::SuperAdmin,
        UiRole::Admin,
        UiRole::DepartmentHead,
        UiRole::Manager,
        UiRole::Member,
        UiRole::Hr,
        UiRole::HrManager,
        UiRole::Person,
    ];

    /// UI name of the role.
    pub fn as_str(self) -> &'static str {
        match self {
            UiRole::SuperAdmin => "super_admin",
            UiRole::Admin => "admin",
            UiRole::DepartmentHead => "department_head",
            UiRole::Manager => "manager",
            UiRole::Member => "member",
            UiRole::Hr => "hr",
            UiRole::HrManager => "hr_manager",
            UiRole::Person => "person",
        }
    }

    /// Backend name of the role. `Admin` collapses to `super_admin`.
    pub fn api_role(self) -> &'static str {
        match self {
            UiRole::Admin | UiRole::SuperAdmin => "super_admin",
            UiRole::DepartmentHead => API_DEPARTMENT_HEAD,
            other => other.as_str(),
        }
    }

    /// Parse a backend role string into a known UI role.
    pub fn from_api_role(raw: &str) -> Option<Self> {
        to_ui_role(Some(raw)).parse().ok()
    }

    /// Whether the role carries tenant administration rights.
    pub fn is_admin(self) -> bool {
        matches!(self, UiRole::Admin | UiRole::SuperAdmin)
    }
}

impl std::fmt::Display for UiRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UiRole {
    type Err = AccessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UiRole::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| AccessError::UnknownRole(s.to_string()))
    }
}

/// Translate a backend role string into the UI vocabulary.
///
/// Absent or empty input yields an empty string. Unrecognized values are
/// returned unchanged.
pub fn to_ui_role(raw: Option<&str>) -> String {
    match raw {
        None | Some("") => String::new(),
        Some(API_DEPARTMENT_HEAD) => UiRole::DepartmentHead.as_str().to_string(),
        Some(other) => other.to_string(),
    }
}

/// Translate a UI role string into the backend vocabulary.
pub fn to_api_role(ui_role: &str) -> String {
    match ui_role {
        "department_head" => API_DEPARTMENT_HEAD.to_string(),
        "admin" => "super_admin".to_string(),
        other => other.to_string(),
    }
}

/// Whether a backend role string maps to an administrative UI role.
pub fn is_admin_role(raw: Option<&str>) -> bool {
    matches!(to_ui_role(raw).as_str(), "admin" | "super_admin")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_ui_role_expands_department_head() {
        assert_eq!(to_ui_role(Some("dept_head")), "department_head");
    }

    #[test]
    fn test_to_ui_role_empty_input() {
        assert_eq!(to_ui_role(None), "");
        assert_eq!(to_ui_role(Some("")), "");
    }

    #[test]
    fn test_to_ui_role_passes_unknown_through() {
        assert_eq!(to_ui_role(Some("auditor")), "auditor");
        assert_eq!(to_ui_role(Some("manager")), "manager");
    }

    #[test]
    fn test_to_api_role_collapses_admin() {
        assert_eq!(to_api_role("admin"), "super_admin");
        assert_eq!(to_api_role("department_head"), "dept_head");
        assert_eq!(to_api_role("hr_manager"), "hr_manager");
        assert_eq!(to_api_role("auditor"), "auditor");
    }

    #[test]
    fn test_ui_roundtrip_except_admin() {
        for role in UiRole::ALL {
            let back = to_ui_role(Some(&to_api_role(role.as_str())));
            if role == UiRole::Admin {
                assert_eq!(back, "super_admin");
            } else {
                assert_eq!(back, role.as_str());
            }
        }
    }

    #[test]
    fn test_api_roundtrip() {
        for &raw in API_ROLES {
            assert_eq!(to_api_role(&to_ui_role(Some(raw))), raw);
        }
    }

    #[test]
    fn test_is_admin_role() {
        assert!(!is_admin_role(None));
        assert!(is_admin_role(Some("admin")));
        assert!(is_admin_role(Some("super_admin")));
        assert!(!is_admin_role(Some("member")));
        assert!(!is_admin_role(Some("dept_head")));
        assert!(!is_admin_role(Some("")));
    }

    #[test]
    fn test_typed_role_helpers() {
        assert_eq!(UiRole::from_api_role("dept_head"), Some(UiRole::DepartmentHead));
        assert_eq!(UiRole::from_api_role("auditor"), None);
        assert_eq!(UiRole::Admin.api_role(), "super_admin");
        assert!(UiRole::SuperAdmin.is_admin());
        assert!(!UiRole::HrManager.is_admin());
        assert!(matches!(
            "root".parse::<UiRole>(),
            Err(AccessError::UnknownRole(name)) if name == "root"
        ));
    }

    #[test]
    fn test_typed_api_role_matches_string_mapping() {
        for role in UiRole::ALL {
            assert_eq!(role.api_role(), to_api_role(role.as_str()));
        }
    }

    #[test]
    fn test_role_serde_uses_ui_names() {
        let json = serde_json::to_string(&UiRole::HrManager).unwrap();
        assert_eq!(json, "\"hr_manager\"");
        let role: UiRole = serde_json::from_str("\"department_head\"").unwrap();
        assert_eq!(role, UiRole::DepartmentHead);
    }
}
