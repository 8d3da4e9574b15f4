//! Authentication and authorization for the admin panel
//!
//! Sessions and guards sit on top of the RBAC resolver in [`rbac`].

pub mod guard;
pub mod rbac;
pub mod session;
pub mod types;

// Re-export commonly used types
pub use guard::RouteGuard;
pub use rbac::{
    AdminAction, MenuItem, Navigation, Permission, PermissionCheck, PermissionChecker, Resource,
    Role, RoleSummary, Section, role_summaries,
};
pub use session::AdminSession;
pub use types::{AdminUser, DenialReason, GuardDecision};
