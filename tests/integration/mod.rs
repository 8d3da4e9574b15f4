//! Integration tests for nomadpay-admin
//!
//! These tests use the crate's public API the way the admin panel does.

pub mod config_loading_tests;
pub mod rbac_contract_tests;
pub mod session_flow_tests;
