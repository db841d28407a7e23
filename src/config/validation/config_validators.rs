//! Configuration section validators

use super::trait_def::Validate;
use crate::config::models::*;
use crate::core::catalog;
use crate::core::providers::gemini::GeminiConfig;
use tracing::debug;
use tracing_subscriber::EnvFilter;

impl Validate for GeminiConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating gemini configuration");
        GeminiConfig::validate(self)
    }
}

impl Validate for StudioConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating studio configuration");

        if self.history_capacity == 0 {
            return Err("History capacity must be at least 1".to_string());
        }

        if !catalog::is_aspect_ratio(&self.default_aspect_ratio) {
            return Err(format!(
                "Unknown default aspect ratio: {}",
                self.default_aspect_ratio
            ));
        }

        if !catalog::is_quality(&self.default_quality) {
            return Err(format!("Unknown default quality: {}", self.default_quality));
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating logging configuration");

        if self.level.trim().is_empty() {
            return Err("Log level cannot be empty".to_string());
        }

        EnvFilter::try_new(&self.level)
            .map_err(|e| format!("Invalid log level '{}': {}", self.level, e))?;

        Ok(())
    }
}
