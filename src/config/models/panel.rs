//! Top level panel configuration

use super::*;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

/// Admin panel configuration as written in `admin.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Authentication and access control
    #[serde(default)]
    pub auth: AuthConfig,
    /// Logging
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl PanelConfig {
    /// Parse a YAML document
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }
}
