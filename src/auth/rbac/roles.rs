//! Role to permission table
//!
//! Each role lists its grants explicitly. Admin is not derived from Super
//! Admin; keep the lists hand-maintained.

use super::permissions::Permission;
use super::types::{Role, RoleSummary};

const SUPER_ADMIN_PERMISSIONS: &[Permission] = &Permission::ALL;

const ADMIN_PERMISSIONS: &[Permission] = &[
    Permission::DashboardView,
    Permission::DashboardRefresh,
    Permission::UsersView,
    Permission::UsersEdit,
    Permission::UsersActivate,
    Permission::UsersDeactivate,
    Permission::TransactionsView,
    Permission::TransactionsEdit,
    Permission::TransactionsExport,
    Permission::AuditLogsView,
    Permission::SystemView,
    Permission::SystemHealth,
    // View only, no edit or security
    Permission::SettingsView,
];

const VIEWER_PERMISSIONS: &[Permission] = &[
    Permission::DashboardView,
    Permission::UsersView,
    Permission::TransactionsView,
];

impl Role {
    /// Permissions granted to this role
    pub const fn permissions(&self) -> &'static [Permission] {
        match self {
            Role::SuperAdmin => SUPER_ADMIN_PERMISSIONS,
            Role::Admin => ADMIN_PERMISSIONS,
            Role::Viewer => VIEWER_PERMISSIONS,
        }
    }

    pub fn grants(&self, permission: Permission) -> bool {
        self.permissions().contains(&permission)
    }

    pub fn summary(&self) -> RoleSummary {
        RoleSummary {
            role: *self,
            description: self.description(),
            permissions: self.permissions().to_vec(),
        }
    }
}

/// Summaries for every role, highest privilege first
pub fn role_summaries() -> Vec<RoleSummary> {
    Role::ALL.iter().map(Role::summary).collect()
}
