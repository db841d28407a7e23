//! Logging configuration

use super::*;
use crate::utils::error::{Result, StudioError};
use serde::{Deserialize, Serialize};

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by `RUST_LOG`
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl LoggingConfig {
    /// Apply `STUDIO_LOG_LEVEL` and `STUDIO_LOG_JSON` if set
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(level) = std::env::var("STUDIO_LOG_LEVEL") {
            self.level = level;
        }
        if let Ok(json) = std::env::var("STUDIO_LOG_JSON") {
            self.json = json
                .parse()
                .map_err(|e| StudioError::Config(format!("Invalid STUDIO_LOG_JSON: {}", e)))?;
        }
        Ok(())
    }
}
