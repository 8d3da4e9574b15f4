//! Authentication configuration

use super::*;
use crate::auth::rbac::{Section, resolve_role_loose};
use serde::{Deserialize, Serialize};

/// Authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Session lifetime in seconds
    #[serde(default = "default_session_ttl")]
    pub session_ttl_secs: u64,
    /// RBAC configuration
    #[serde(default)]
    pub rbac: RbacConfig,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_ttl_secs: default_session_ttl(),
            rbac: RbacConfig::default(),
        }
    }
}

impl AuthConfig {
    /// Validate authentication configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.session_ttl_secs < MIN_SESSION_TTL_SECS {
            return Err("Session TTL should be at least 5 minutes (300 seconds)".to_string());
        }

        if self.session_ttl_secs > MAX_SESSION_TTL_SECS {
            return Err("Session TTL should not exceed 30 days for security reasons".to_string());
        }

        self.rbac.validate()
    }

    /// Session lifetime, `None` when the configured seconds do not fit a duration
    pub fn session_ttl(&self) -> Option<chrono::Duration> {
        i64::try_from(self.session_ttl_secs)
            .ok()
            .and_then(chrono::Duration::try_seconds)
    }
}

/// RBAC configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RbacConfig {
    /// Roles allowed to open an admin session
    #[serde(default = "default_admin_roles")]
    pub login_roles: Vec<String>,
    /// Roles the route guard lets through
    #[serde(default = "default_admin_roles")]
    pub guard_roles: Vec<String>,
    /// Section shown first after login
    #[serde(default = "default_section")]
    pub default_section: String,
}

impl Default for RbacConfig {
    fn default() -> Self {
        Self {
            login_roles: default_admin_roles(),
            guard_roles: default_admin_roles(),
            default_section: default_section(),
        }
    }
}

impl RbacConfig {
    /// Validate RBAC configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.login_roles.is_empty() {
            return Err("login_roles cannot be empty".to_string());
        }

        if self.guard_roles.is_empty() {
            return Err("guard_roles cannot be empty".to_string());
        }

        for role in self.login_roles.iter().chain(self.guard_roles.iter()) {
            if resolve_role_loose(role).is_none() {
                return Err(format!("Unknown role '{}'", role));
            }
        }

        if Section::lookup(&self.default_section).is_none() {
            return Err(format!("Unknown default section '{}'", self.default_section));
        }

        Ok(())
    }
}
