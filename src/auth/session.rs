//! Admin sessions
//!
//! A session binds an [`AdminUser`] and its tokens to the role it signed in
//! with. The role is fixed for the lifetime of the session.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use super::rbac::{PermissionChecker, Role, role_matches};
use super::types::AdminUser;
use crate::config::AuthConfig;
use crate::utils::error::{AdminError, Result};
use crate::utils::logging::{AccessStatus, SecurityLogger};

/// Authenticated admin session
#[derive(Debug, Clone, Serialize)]
pub struct AdminSession {
    /// Session id
    pub id: Uuid,
    pub user: AdminUser,
    /// Access token
    #[serde(skip_serializing)]
    access_token: String,
    /// Refresh token, if the API issued one
    #[serde(skip_serializing)]
    refresh_token: Option<String>,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl AdminSession {
    /// Open a session for a user the authentication API accepted
    ///
    /// Only roles listed in `rbac.login_roles` may sign in to the panel.
    pub fn establish(
        user: AdminUser,
        access_token: impl Into<String>,
        refresh_token: Option<String>,
        config: &AuthConfig,
    ) -> Result<Self> {
        config
            .validate()
            .map_err(|e| AdminError::config(format!("Auth config error: {}", e)))?;

        let access_token = access_token.into();
        if access_token.trim().is_empty() {
            SecurityLogger::log_admin_access(&user.email, "Failed Admin Login", AccessStatus::Failed);
            return Err(AdminError::auth("Missing access token"));
        }

        let allowed = user
            .role
            .parse::<Role>()
            .map(|role| {
                config
                    .rbac
                    .login_roles
                    .iter()
                    .any(|login_role| role_matches(login_role, role.as_str()))
            })
            .unwrap_or(false);

        if !allowed {
            SecurityLogger::log_admin_access(
                &user.email,
                "Unauthorized Admin Access",
                AccessStatus::Denied,
            );
            return Err(AdminError::authorization(
                "Access denied. Admin privileges required.",
            ));
        }

        let issued_at = Utc::now();
        let expires_at = config
            .session_ttl()
            .and_then(|ttl| issued_at.checked_add_signed(ttl))
            .ok_or_else(|| {
                AdminError::config(format!(
                    "Session TTL of {}s is out of range",
                    config.session_ttl_secs
                ))
            })?;

        let session = Self {
            id: Uuid::new_v4(),
            user,
            access_token,
            refresh_token,
            issued_at,
            expires_at,
        };

        SecurityLogger::log_admin_access(&session.user.email, "Admin Login", AccessStatus::Success);
        debug!(session_id = %session.id, role = %session.user.role, "Admin session established");
        Ok(session)
    }

    /// Close the session, recording the logout
    pub fn logout(self) {
        SecurityLogger::log_admin_access(&self.user.email, "Admin Logout", AccessStatus::Success);
        debug!(session_id = %self.id, "Admin session closed");
    }

    /// Raw role value of the session
    pub fn role(&self) -> &str {
        &self.user.role
    }

    /// Resolver for the session's role
    pub fn checker(&self) -> PermissionChecker {
        PermissionChecker::from_role_str(&self.user.role)
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Token present and session not expired
    pub fn is_token_valid(&self) -> bool {
        !self.access_token.is_empty() && !self.is_expired()
    }

    /// Move the expiry, e.g. after a token refresh
    pub fn extend(&mut self, ttl: chrono::Duration) -> Result<()> {
        self.expires_at = Utc::now()
            .checked_add_signed(ttl)
            .ok_or_else(|| AdminError::validation("Session expiry is out of range"))?;
        Ok(())
    }
}
