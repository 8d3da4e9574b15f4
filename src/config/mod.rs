//! Configuration management for the admin panel
//!
//! Configuration is read from a YAML file, then environment overrides are
//! applied and the result is validated.

pub mod loader;
pub mod models;
#[cfg(test)]
mod tests;

pub use models::*;

use crate::utils::error::{AdminError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the admin panel
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Panel configuration
    pub panel: PanelConfig,
}

impl Config {
    /// Load configuration from file, then apply environment overrides
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_file_with_overrides(path, |key| std::env::var(key).ok()).await
    }

    /// Load configuration from file, taking overrides from `lookup`
    pub async fn from_file_with_overrides<P, F>(path: P, lookup: F) -> Result<Self>
    where
        P: AsRef<Path>,
        F: Fn(&str) -> Option<String>,
    {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path).await?;

        let mut panel = PanelConfig::from_yaml_str(&content)?;
        panel.apply_overrides(lookup)?;

        let config = Self { panel };
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from defaults and environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let mut panel = PanelConfig::default();
        panel.apply_env()?;

        let config = Self { panel };
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise from the environment
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path).await,
            None => Self::from_env(),
        }
    }

    /// Get auth configuration
    pub fn auth(&self) -> &AuthConfig {
        &self.panel.auth
    }

    /// Get RBAC configuration
    pub fn rbac(&self) -> &RbacConfig {
        &self.panel.auth.rbac
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.panel.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.panel
            .auth
            .validate()
            .map_err(|e| AdminError::Config(format!("Auth config error: {}", e)))?;

        self.panel
            .logging
            .validate()
            .map_err(|e| AdminError::Config(format!("Logging config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }
}
