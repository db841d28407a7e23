//! Logging setup
//!
//! Installs the global `tracing` subscriber used by the `studio` binary.

use crate::config::LoggingConfig;
use crate::utils::error::{Result, StudioError};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Build the filter: `RUST_LOG` when set and valid, otherwise the configured level
pub fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.level)
            .map_err(|e| StudioError::Config(format!("Invalid log level '{}': {}", config.level, e))),
    }
}

/// Install the global subscriber.
///
/// Returns `false` when a subscriber was already installed; the existing one
/// is kept.
pub fn init_tracing(config: &LoggingConfig) -> Result<bool> {
    let filter = build_env_filter(config)?;
    let registry = tracing_subscriber::registry().with(filter);

    let installed = if config.json {
        registry
            .with(fmt::layer().json().with_current_span(true))
            .try_init()
            .is_ok()
    } else {
        registry.with(fmt::layer().with_target(false)).try_init().is_ok()
    };

    Ok(installed)
}
