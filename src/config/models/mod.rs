//! Configuration data models

#![allow(missing_docs)]

pub mod auth;
pub mod logging;
pub mod panel;

// Re-export all configuration types
pub use auth::*;
pub use logging::*;
pub use panel::*;

/// Roles allowed to sign in to the panel and to pass the route guard
pub fn default_admin_roles() -> Vec<String> {
    vec!["Admin".to_string(), "Super Admin".to_string()]
}

/// Default session lifetime in seconds
pub fn default_session_ttl() -> u64 {
    3600 // 1 hour
}

pub fn default_section() -> String {
    "dashboard".to_string()
}

pub fn default_log_level() -> String {
    "info".to_string()
}

/// Shortest accepted session lifetime
pub const MIN_SESSION_TTL_SECS: u64 = 300;

/// Longest accepted session lifetime
pub const MAX_SESSION_TTL_SECS: u64 = 86400 * 30;
