//! Configuration management for the studio
//!
//! This module handles loading, validation, and environment overrides of the
//! studio configuration.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::core::providers::gemini::GeminiConfig;
use crate::utils::error::{Result, StudioError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the studio
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Gemini client configuration
    #[serde(default)]
    pub gemini: GeminiConfig,
    /// Session defaults
    #[serde(default)]
    pub studio: StudioConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load and validate configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Self::read_file(path.as_ref()).await?;
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let mut config = Self::default();
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Load from an optional file, then apply environment overrides and validate
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::read_file(path).await?,
            None => Self::default(),
        };
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    async fn read_file(path: &Path) -> Result<Self> {
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| StudioError::Config(format!("Failed to read config file: {}", e)))?;

        serde_yaml::from_str(&content)
            .map_err(|e| StudioError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Overlay values from environment variables
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(api_key) =
            std::env::var("GEMINI_API_KEY").or_else(|_| std::env::var("GOOGLE_API_KEY"))
        {
            self.gemini.api_key = api_key;
        }
        self.gemini
            .apply_env_overrides()
            .map_err(|e| StudioError::Config(e.message().to_string()))?;
        self.studio.apply_env_overrides()?;
        self.logging.apply_env_overrides()?;
        Ok(())
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        Validate::validate(&self.gemini)
            .map_err(|e| StudioError::Config(format!("Gemini config error: {}", e)))?;

        self.studio
            .validate()
            .map_err(|e| StudioError::Config(format!("Studio config error: {}", e)))?;

        self.logging
            .validate()
            .map_err(|e| StudioError::Config(format!("Logging config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| StudioError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
