//! Role-Based Access Control (RBAC) for the admin panel
//!
//! Roles map to a fixed set of catalogue permissions; sections and named
//! actions are gated on those permissions through [`PermissionChecker`].

mod helpers;
mod navigation;
mod permissions;
mod roles;
mod sections;
mod system;
mod types;

// Re-export public types and structs
pub(crate) use helpers::{resolve_role_loose, role_matches};
pub use navigation::{MenuItem, Navigation};
pub use permissions::{Permission, Resource};
pub use roles::role_summaries;
pub use sections::{AdminAction, Section};
pub use system::PermissionChecker;
pub use types::{PermissionCheck, Role, RoleSummary};
