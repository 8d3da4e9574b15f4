//! Admin access audit trail
//!
//! Login, logout and guard decisions are written as structured `tracing`
//! events on the `admin_access` and `admin_authz` targets so they can be
//! routed separately from application logs.

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use std::fmt;
use tracing::{debug, info, warn};

/// Longest email recorded in the audit trail
const MAX_EMAIL_LEN: usize = 254;

/// Outcome of an audited admin access
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AccessStatus {
    Success,
    Denied,
    Failed,
}

impl fmt::Display for AccessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AccessStatus::Success => "Success",
            AccessStatus::Denied => "Denied",
            AccessStatus::Failed => "Failed",
        };
        f.write_str(s)
    }
}

/// One entry of the audit trail
#[derive(Debug, Clone, Serialize)]
pub struct AdminAccessRecord {
    /// RFC 3339 timestamp, UTC
    pub timestamp: String,
    pub email: String,
    pub action: String,
    pub status: AccessStatus,
    /// Where the access came from
    pub source: &'static str,
}

impl AdminAccessRecord {
    pub fn new(email: &str, action: &str, status: AccessStatus) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            // Truncate to keep log lines bounded
            email: email.chars().take(MAX_EMAIL_LEN).collect(),
            action: action.to_string(),
            status,
            source: "Admin Panel",
        }
    }
}

/// Audit logging for the admin panel
pub struct SecurityLogger;

impl SecurityLogger {
    /// Record an admin login, logout or refused access
    pub fn log_admin_access(email: &str, action: &str, status: AccessStatus) -> AdminAccessRecord {
        let record = AdminAccessRecord::new(email, action, status);

        match status {
            AccessStatus::Success => info!(
                target: "admin_access",
                timestamp = %record.timestamp,
                email = %record.email,
                action = %record.action,
                status = %record.status,
                source = record.source,
                "Admin access log"
            ),
            _ => warn!(
                target: "admin_access",
                timestamp = %record.timestamp,
                email = %record.email,
                action = %record.action,
                status = %record.status,
                source = record.source,
                "Admin access log"
            ),
        }

        record
    }

    /// Record an authorization decision taken by a guard
    pub fn log_authz_event(role: &str, resource: &str, granted: bool, reason: Option<&str>) {
        if granted {
            debug!(
                target: "admin_authz",
                role = %role,
                resource = %resource,
                "Authorization granted"
            );
        } else {
            warn!(
                target: "admin_authz",
                role = %role,
                resource = %resource,
                reason = reason.unwrap_or("unspecified"),
                "Authorization denied"
            );
        }
    }
}
