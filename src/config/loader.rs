//! Environment overrides
//!
//! | Variable                 | Field                   |
//! |--------------------------|-------------------------|
//! | `ADMIN_LOG_LEVEL`        | `logging.level`         |
//! | `ADMIN_LOG_FORMAT`       | `logging.format`        |
//! | `ADMIN_SESSION_TTL_SECS` | `auth.session_ttl_secs` |

use super::models::*;
use crate::utils::error::{AdminError, Result};
use std::env;
use tracing::debug;

impl PanelConfig {
    /// Apply overrides from the process environment
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_overrides(|key| env::var(key).ok())
    }

    /// Apply overrides from any key lookup
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup("ADMIN_LOG_LEVEL") {
            debug!("Overriding log level from environment");
            self.logging.level = level;
        }
        if let Some(format) = lookup("ADMIN_LOG_FORMAT") {
            self.logging.format = format.parse::<LogFormat>().map_err(AdminError::Config)?;
        }
        if let Some(ttl) = lookup("ADMIN_SESSION_TTL_SECS") {
            self.auth.session_ttl_secs = ttl
                .parse()
                .map_err(|e| AdminError::Config(format!("Invalid session TTL: {}", e)))?;
        }
        Ok(())
    }
}
