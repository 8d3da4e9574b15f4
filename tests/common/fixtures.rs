//! Test fixtures and data factories
//!
//! All factories create real objects, not mocks.

use chrono::Utc;
use nomadpay_admin::AdminUser;
use std::io::Write;
use tempfile::NamedTempFile;
use uuid::Uuid;

/// Factory for creating admin users as the authentication API returns them
pub struct AdminUserFactory;

impl AdminUserFactory {
    /// Create a user with the given raw role value
    pub fn with_role(role: &str) -> AdminUser {
        let suffix = &Uuid::new_v4().to_string()[..8];
        AdminUser {
            id: Uuid::new_v4().to_string(),
            email: format!("admin-{}@nomadpay.com", suffix),
            name: format!("admin_{}", suffix),
            role: role.to_string(),
            created_at: Some(Utc::now()),
        }
    }

    pub fn super_admin() -> AdminUser {
        Self::with_role("Super Admin")
    }

    pub fn admin() -> AdminUser {
        Self::with_role("Admin")
    }

    pub fn viewer() -> AdminUser {
        Self::with_role("Viewer")
    }
}

/// Factory for YAML config files on disk
pub struct ConfigFileFactory;

impl ConfigFileFactory {
    /// Write `yaml` to a temporary file that lives as long as the handle
    pub fn write(yaml: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("create temp config");
        file.write_all(yaml.as_bytes()).expect("write temp config");
        file
    }
}
