//! Tracing subscriber initialisation

use crate::config::{LogFormat, LoggingConfig};
use crate::utils::error::{AdminError, Result};
use tracing_subscriber::EnvFilter;

/// Build the log filter; `RUST_LOG` takes precedence over the configured level
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| AdminError::config(format!("Invalid log level '{}': {}", config.level, e)))
}

/// Install the global subscriber
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let filter = build_filter(config)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false);

    let installed = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.try_init(),
    };

    installed.map_err(|e| AdminError::config(format!("Failed to initialise logging: {}", e)))
}
