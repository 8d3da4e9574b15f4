//! Permission catalogue
//!
//! The catalogue is closed: every permission the admin panel knows about is a
//! variant of [`Permission`]. Strings of the form `resource:action` are only
//! produced and parsed at the boundary (session payloads, logs, CLI).

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Resource namespace a permission belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Resource {
    Dashboard,
    Users,
    Transactions,
    AuditLogs,
    Settings,
    System,
}

impl Resource {
    pub const ALL: [Resource; 6] = [
        Resource::Dashboard,
        Resource::Users,
        Resource::Transactions,
        Resource::AuditLogs,
        Resource::Settings,
        Resource::System,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Resource::Dashboard => "dashboard",
            Resource::Users => "users",
            Resource::Transactions => "transactions",
            Resource::AuditLogs => "audit_logs",
            Resource::Settings => "settings",
            Resource::System => "system",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single grant from the catalogue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Permission {
    // Dashboard
    DashboardView,
    DashboardRefresh,

    // User management
    UsersView,
    UsersCreate,
    UsersEdit,
    UsersDelete,
    UsersChangeRole,
    UsersActivate,
    UsersDeactivate,

    // Transactions
    TransactionsView,
    TransactionsEdit,
    TransactionsDelete,
    TransactionsExport,

    // Audit logs
    AuditLogsView,
    AuditLogsExport,

    // Settings
    SettingsView,
    SettingsEdit,
    SettingsSecurity,

    // System health and administration
    SystemView,
    SystemHealth,
    SystemRestart,
    SystemCache,
    SystemMaintenance,
    SystemBackup,
    SystemLogs,
}

impl Permission {
    /// Full catalogue in declaration order
    pub const ALL: [Permission; 25] = [
        Permission::DashboardView,
        Permission::DashboardRefresh,
        Permission::UsersView,
        Permission::UsersCreate,
        Permission::UsersEdit,
        Permission::UsersDelete,
        Permission::UsersChangeRole,
        Permission::UsersActivate,
        Permission::UsersDeactivate,
        Permission::TransactionsView,
        Permission::TransactionsEdit,
        Permission::TransactionsDelete,
        Permission::TransactionsExport,
        Permission::AuditLogsView,
        Permission::AuditLogsExport,
        Permission::SettingsView,
        Permission::SettingsEdit,
        Permission::SettingsSecurity,
        Permission::SystemView,
        Permission::SystemHealth,
        Permission::SystemRestart,
        Permission::SystemCache,
        Permission::SystemMaintenance,
        Permission::SystemBackup,
        Permission::SystemLogs,
    ];

    /// `resource:action` identifier
    pub const fn as_str(&self) -> &'static str {
        match self {
            Permission::DashboardView => "dashboard:view",
            Permission::DashboardRefresh => "dashboard:refresh",
            Permission::UsersView => "users:view",
            Permission::UsersCreate => "users:create",
            Permission::UsersEdit => "users:edit",
            Permission::UsersDelete => "users:delete",
            Permission::UsersChangeRole => "users:change_role",
            Permission::UsersActivate => "users:activate",
            Permission::UsersDeactivate => "users:deactivate",
            Permission::TransactionsView => "transactions:view",
            Permission::TransactionsEdit => "transactions:edit",
            Permission::TransactionsDelete => "transactions:delete",
            Permission::TransactionsExport => "transactions:export",
            Permission::AuditLogsView => "audit_logs:view",
            Permission::AuditLogsExport => "audit_logs:export",
            Permission::SettingsView => "settings:view",
            Permission::SettingsEdit => "settings:edit",
            Permission::SettingsSecurity => "settings:security",
            Permission::SystemView => "system:view",
            Permission::SystemHealth => "system:health",
            Permission::SystemRestart => "system:restart",
            Permission::SystemCache => "system:cache",
            Permission::SystemMaintenance => "system:maintenance",
            Permission::SystemBackup => "system:backup",
            Permission::SystemLogs => "system:logs",
        }
    }

    pub const fn resource(&self) -> Resource {
        match self {
            Permission::DashboardView | Permission::DashboardRefresh => Resource::Dashboard,
            Permission::UsersView
            | Permission::UsersCreate
            | Permission::UsersEdit
            | Permission::UsersDelete
            | Permission::UsersChangeRole
            | Permission::UsersActivate
            | Permission::UsersDeactivate => Resource::Users,
            Permission::TransactionsView
            | Permission::TransactionsEdit
            | Permission::TransactionsDelete
            | Permission::TransactionsExport => Resource::Transactions,
            Permission::AuditLogsView | Permission::AuditLogsExport => Resource::AuditLogs,
            Permission::SettingsView | Permission::SettingsEdit | Permission::SettingsSecurity => {
                Resource::Settings
            }
            Permission::SystemView
            | Permission::SystemHealth
            | Permission::SystemRestart
            | Permission::SystemCache
            | Permission::SystemMaintenance
            | Permission::SystemBackup
            | Permission::SystemLogs => Resource::System,
        }
    }

    /// Action part of the identifier
    pub fn action(&self) -> &'static str {
        let id = self.as_str();
        // Every identifier contains exactly one ':'
        &id[self.resource().as_str().len() + 1..]
    }

    /// Look up a catalogue member by its identifier
    pub fn lookup(id: &str) -> Option<Permission> {
        Self::ALL.iter().copied().find(|p| p.as_str() == id)
    }

    /// Look up a catalogue member from separate resource and action strings
    pub fn from_parts(resource: &str, action: &str) -> Option<Permission> {
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.resource().as_str() == resource && p.action() == action)
    }

    /// All catalogue members for one resource
    pub fn for_resource(resource: Resource) -> impl Iterator<Item = Permission> {
        Self::ALL
            .into_iter()
            .filter(move |p| p.resource() == resource)
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| format!("Unknown permission: {}", s))
    }
}

impl Serialize for Permission {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Permission {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = String::deserialize(deserializer)?;
        id.parse().map_err(serde::de::Error::custom)
    }
}
