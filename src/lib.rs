//! # NomadPay Admin
//!
//! Role-based access control for the NomadPay admin panel.
//!
//! Administrators sign in with one of three roles (`Super Admin`, `Admin`,
//! `Viewer`). Each role maps to a fixed set of permissions from a closed
//! catalogue, and every dashboard section and management action is gated on
//! those permissions.
//!
//! ## Quick Start
//!
//! ```rust
//! use nomadpay_admin::{PermissionChecker, Section};
//!
//! let checker = PermissionChecker::from_role_str("Admin");
//! assert!(checker.has_permission("users:edit"));
//! assert!(!checker.has_permission("users:delete"));
//! assert!(checker.can_access(Section::AuditLogs));
//!
//! // Unknown roles are denied everything
//! let unknown = PermissionChecker::from_role_str("Hacker");
//! assert!(unknown.permissions().is_empty());
//! ```
//!
//! ## Sessions
//!
//! ```rust,no_run
//! use nomadpay_admin::{AdminSession, AdminUser, Config, RouteGuard};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/admin.yaml").await?;
//!     let user = AdminUser {
//!         id: "1".into(),
//!         email: "admin@nomadpay.com".into(),
//!         name: "admin".into(),
//!         role: "Admin".into(),
//!         created_at: None,
//!     };
//!     let session = AdminSession::establish(user, "access-token", None, config.auth())?;
//!     let guard = RouteGuard::from_config(config.rbac());
//!     assert!(guard.evaluate(Some(&session)).is_allowed());
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

pub mod auth;
pub mod config;
pub mod utils;

// Re-export main types
pub use auth::{
    AdminAction, AdminSession, AdminUser, DenialReason, GuardDecision, MenuItem, Navigation,
    Permission, PermissionCheck, PermissionChecker, Resource, Role, RoleSummary, RouteGuard,
    Section, role_summaries,
};
pub use config::Config;
pub use utils::error::{AdminError, Result};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Short git hash recorded at build time
pub const GIT_HASH: &str = env!("GIT_HASH");

/// Unix timestamp of the build
pub const BUILD_TIME: &str = env!("BUILD_TIME");
