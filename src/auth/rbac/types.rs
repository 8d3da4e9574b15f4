//! RBAC type definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::permissions::Permission;

/// Administrator role attached to a session at login
///
/// The serialized literals are the ones the authentication API issues,
/// including the space in `"Super Admin"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    /// Full access to every permission in the catalogue
    #[serde(rename = "Super Admin")]
    SuperAdmin,
    /// Day-to-day administration without destructive or security controls
    #[serde(rename = "Admin")]
    Admin,
    /// Read-only access
    #[serde(rename = "Viewer")]
    Viewer,
}

impl Role {
    /// All roles, highest privilege first
    pub const ALL: [Role; 3] = [Role::SuperAdmin, Role::Admin, Role::Viewer];

    /// Wire literal for this role
    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "Super Admin",
            Role::Admin => "Admin",
            Role::Viewer => "Viewer",
        }
    }

    /// Human readable description shown next to the role badge
    pub const fn description(&self) -> &'static str {
        match self {
            Role::SuperAdmin => {
                "Full access to all features including system settings and security controls"
            }
            Role::Admin => {
                "Access to dashboard, users, transactions, and audit logs with management capabilities"
            }
            Role::Viewer => "Read-only access to dashboard and user information",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    /// Exact, case-sensitive match against the wire literals
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Super Admin" => Ok(Role::SuperAdmin),
            "Admin" => Ok(Role::Admin),
            "Viewer" => Ok(Role::Viewer),
            _ => Err(format!("Invalid admin role: {}", s)),
        }
    }
}

/// Permission check result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PermissionCheck {
    /// Permission string as it was queried
    pub permission: String,
    /// Whether permission is granted
    pub granted: bool,
    /// Role the decision was made for (raw session value)
    pub role: String,
    /// Reason for denial (if not granted)
    pub denial_reason: Option<String>,
}

/// Snapshot of a role's grants, used for display
#[derive(Debug, Clone, Serialize)]
pub struct RoleSummary {
    pub role: Role,
    pub description: &'static str,
    pub permissions: Vec<Permission>,
}
