//! Authentication and authorization types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::rbac::Section;

/// Administrator as returned by the authentication API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: String,
    pub email: String,
    pub name: String,
    /// Raw role value, e.g. `"Super Admin"`
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Why a guard sent the visitor back to the login page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialReason {
    /// No session
    NotAuthenticated,
    /// Session role is not one of the guard's roles
    RoleNotAllowed,
    /// Token missing or session expired
    InvalidToken,
}

impl fmt::Display for DenialReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DenialReason::NotAuthenticated => "not authenticated",
            DenialReason::RoleNotAllowed => "user does not have required role",
            DenialReason::InvalidToken => "invalid or expired token",
        };
        f.write_str(s)
    }
}

/// Outcome of a route or page guard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum GuardDecision {
    /// Render the page
    Allow,
    /// Send the visitor to the login page
    RedirectToLogin { reason: DenialReason },
    /// Signed in, but the role cannot open this section
    AccessDenied { section: Section },
}

impl GuardDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, GuardDecision::Allow)
    }
}
