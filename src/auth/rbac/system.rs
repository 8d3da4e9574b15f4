//! Permission resolver
//!
//! [`PermissionChecker`] answers access questions for a single role. Every
//! query resolves to a boolean: unknown roles, permissions, sections and
//! actions are denied, never reported as errors.

use std::collections::BTreeSet;
use tracing::{debug, warn};

use super::permissions::Permission;
use super::sections::{AdminAction, Section};
use super::types::{PermissionCheck, Role};

/// Access decisions for one administrator role
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionChecker {
    /// Role value as supplied by the session
    role_name: String,
    /// Parsed role, `None` when the session carried an unrecognized value
    role: Option<Role>,
    /// Grants for `role`, empty for an unrecognized role
    permissions: BTreeSet<Permission>,
}

impl PermissionChecker {
    /// Create a checker for a known role
    pub fn new(role: Role) -> Self {
        Self {
            role_name: role.as_str().to_string(),
            role: Some(role),
            permissions: role.permissions().iter().copied().collect(),
        }
    }

    /// Create a checker from the raw role string of a session
    ///
    /// An unrecognized role yields a checker with no permissions.
    pub fn from_role_str(role: &str) -> Self {
        match role.parse::<Role>() {
            Ok(parsed) => Self::new(parsed),
            Err(_) => {
                warn!(role = %role, "Unrecognized admin role, denying all permissions");
                Self {
                    role_name: role.to_string(),
                    role: None,
                    permissions: BTreeSet::new(),
                }
            }
        }
    }

    /// Check a typed permission
    pub fn has(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }

    /// Check a permission identifier such as `users:edit`
    pub fn has_permission(&self, permission: &str) -> bool {
        match Permission::lookup(permission) {
            Some(p) => self.has(p),
            None => {
                debug!(permission = %permission, role = %self.role_name, "Unknown permission queried");
                false
            }
        }
    }

    /// True if at least one of the permissions is held; false for an empty list
    pub fn has_any_permission<S: AsRef<str>>(&self, permissions: &[S]) -> bool {
        permissions.iter().any(|p| self.has_permission(p.as_ref()))
    }

    /// True if every permission is held; true for an empty list
    pub fn has_all_permissions<S: AsRef<str>>(&self, permissions: &[S]) -> bool {
        permissions.iter().all(|p| self.has_permission(p.as_ref()))
    }

    /// Check a typed section
    pub fn can_access(&self, section: Section) -> bool {
        self.has(section.required_permission())
    }

    /// Check a section identifier such as `audit-logs`
    pub fn can_access_section(&self, section: &str) -> bool {
        match Section::lookup(section) {
            Some(s) => self.can_access(s),
            None => {
                debug!(section = %section, role = %self.role_name, "Unknown section queried");
                false
            }
        }
    }

    /// Check the permission `<resource>:<action>`
    pub fn can_perform_action(&self, resource: &str, action: &str) -> bool {
        let required_permission = format!("{}:{}", resource, action);
        self.has_permission(&required_permission)
    }

    /// Check a named UI action such as `user-delete`
    pub fn can_perform_named_action(&self, action: &str) -> bool {
        match AdminAction::lookup(action) {
            Some(a) => self.can(a),
            None => {
                debug!(action = %action, role = %self.role_name, "Unknown admin action queried");
                false
            }
        }
    }

    /// Check a typed named action
    pub fn can(&self, action: AdminAction) -> bool {
        action.required_permissions().iter().all(|p| self.has(*p))
    }

    /// Detailed permission check
    pub fn check(&self, permission: &str) -> PermissionCheck {
        let denial_reason = if self.role.is_none() {
            Some(format!("Unrecognized role: {}", self.role_name))
        } else {
            match Permission::lookup(permission) {
                None => Some(format!("Unknown permission: {}", permission)),
                Some(p) if !self.has(p) => Some(format!("Missing permission: {}", permission)),
                Some(_) => None,
            }
        };

        PermissionCheck {
            permission: permission.to_string(),
            granted: denial_reason.is_none(),
            role: self.role_name.clone(),
            denial_reason,
        }
    }

    /// Parsed role, if the session role was recognized
    pub fn role(&self) -> Option<Role> {
        self.role
    }

    /// Role value as supplied by the session
    pub fn role_name(&self) -> &str {
        &self.role_name
    }

    /// Owned snapshot of the granted permissions, in catalogue order
    pub fn permissions(&self) -> BTreeSet<Permission> {
        self.permissions.clone()
    }

    /// Granted permissions as identifiers, in catalogue order
    pub fn permission_names(&self) -> Vec<String> {
        self.permissions.iter().map(|p| p.as_str().to_string()).collect()
    }

    pub fn is_super_admin(&self) -> bool {
        self.role == Some(Role::SuperAdmin)
    }

    /// Super Admin or Admin
    pub fn is_admin(&self) -> bool {
        matches!(self.role, Some(Role::SuperAdmin | Role::Admin))
    }

    pub fn is_viewer(&self) -> bool {
        self.role == Some(Role::Viewer)
    }
}

impl From<Role> for PermissionChecker {
    fn from(role: Role) -> Self {
        Self::new(role)
    }
}
