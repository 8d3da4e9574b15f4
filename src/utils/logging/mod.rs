//! Logging utilities
//!
//! Subscriber setup and the admin access audit trail.

pub mod init;
pub mod security_logger;

pub use init::init_tracing;
pub use security_logger::{AccessStatus, AdminAccessRecord, SecurityLogger};
