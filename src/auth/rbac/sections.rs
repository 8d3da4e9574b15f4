//! Dashboard sections and named admin actions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::permissions::Permission;

/// UI area of the admin panel, gated by a single view permission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    Dashboard,
    Users,
    Transactions,
    AuditLogs,
    System,
    Settings,
}

impl Section {
    /// Menu order
    pub const ALL: [Section; 6] = [
        Section::Dashboard,
        Section::Users,
        Section::Transactions,
        Section::AuditLogs,
        Section::System,
        Section::Settings,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Users => "users",
            Section::Transactions => "transactions",
            Section::AuditLogs => "audit-logs",
            Section::System => "system",
            Section::Settings => "settings",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Users => "Users",
            Section::Transactions => "Transactions",
            Section::AuditLogs => "Audit Logs",
            Section::System => "System",
            Section::Settings => "Settings",
        }
    }

    /// The one permission that opens this section
    pub const fn required_permission(&self) -> Permission {
        match self {
            Section::Dashboard => Permission::DashboardView,
            Section::Users => Permission::UsersView,
            Section::Transactions => Permission::TransactionsView,
            Section::AuditLogs => Permission::AuditLogsView,
            Section::System => Permission::SystemView,
            Section::Settings => Permission::SettingsView,
        }
    }

    pub fn lookup(id: &str) -> Option<Section> {
        Self::ALL.iter().copied().find(|s| s.as_str() == id)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| format!("Unknown section: {}", s))
    }
}

/// Management action exposed by a button or menu in the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdminAction {
    UserEdit,
    UserDelete,
    UserRoleChange,
    UserActivate,
    UserDeactivate,
    TransactionEdit,
    TransactionDelete,
    SettingsEdit,
    SettingsSecurity,
}

impl AdminAction {
    pub const ALL: [AdminAction; 9] = [
        AdminAction::UserEdit,
        AdminAction::UserDelete,
        AdminAction::UserRoleChange,
        AdminAction::UserActivate,
        AdminAction::UserDeactivate,
        AdminAction::TransactionEdit,
        AdminAction::TransactionDelete,
        AdminAction::SettingsEdit,
        AdminAction::SettingsSecurity,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            AdminAction::UserEdit => "user-edit",
            AdminAction::UserDelete => "user-delete",
            AdminAction::UserRoleChange => "user-role-change",
            AdminAction::UserActivate => "user-activate",
            AdminAction::UserDeactivate => "user-deactivate",
            AdminAction::TransactionEdit => "transaction-edit",
            AdminAction::TransactionDelete => "transaction-delete",
            AdminAction::SettingsEdit => "settings-edit",
            AdminAction::SettingsSecurity => "settings-security",
        }
    }

    /// Permissions that must all be held to perform the action
    pub const fn required_permissions(&self) -> &'static [Permission] {
        match self {
            AdminAction::UserEdit => &[Permission::UsersEdit],
            AdminAction::UserDelete => &[Permission::UsersDelete],
            AdminAction::UserRoleChange => &[Permission::UsersChangeRole],
            AdminAction::UserActivate => &[Permission::UsersActivate],
            AdminAction::UserDeactivate => &[Permission::UsersDeactivate],
            AdminAction::TransactionEdit => &[Permission::TransactionsEdit],
            AdminAction::TransactionDelete => &[Permission::TransactionsDelete],
            AdminAction::SettingsEdit => &[Permission::SettingsEdit],
            AdminAction::SettingsSecurity => &[Permission::SettingsSecurity],
        }
    }

    pub fn lookup(id: &str) -> Option<AdminAction> {
        Self::ALL.iter().copied().find(|a| a.as_str() == id)
    }
}

impl fmt::Display for AdminAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
