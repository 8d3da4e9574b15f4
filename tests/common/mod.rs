//! Common test utilities for nomadpay-admin

pub mod fixtures;

// Re-export commonly used items
pub use fixtures::{AdminUserFactory, ConfigFileFactory};
