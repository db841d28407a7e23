//! Studio session configuration

use super::*;
use crate::core::catalog::{ORIGINAL_ASPECT_RATIO, STANDARD_QUALITY};
use crate::core::session::SessionState;
use crate::utils::error::{Result, StudioError};
use serde::{Deserialize, Serialize};

fn default_aspect_ratio() -> String {
    ORIGINAL_ASPECT_RATIO.to_string()
}

fn default_quality() -> String {
    STANDARD_QUALITY.to_string()
}

/// Studio configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudioConfig {
    /// Number of past result sets kept in the gallery
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,
    /// Aspect ratio selected when a session starts
    #[serde(default = "default_aspect_ratio")]
    pub default_aspect_ratio: String,
    /// Quality level selected when a session starts
    #[serde(default = "default_quality")]
    pub default_quality: String,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            history_capacity: default_history_capacity(),
            default_aspect_ratio: default_aspect_ratio(),
            default_quality: default_quality(),
        }
    }
}

impl StudioConfig {
    /// Apply `STUDIO_HISTORY_CAPACITY` if set
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(capacity) = std::env::var("STUDIO_HISTORY_CAPACITY") {
            self.history_capacity = capacity.parse().map_err(|e| {
                StudioError::Config(format!("Invalid STUDIO_HISTORY_CAPACITY: {}", e))
            })?;
        }
        Ok(())
    }

    /// Fresh session using the configured capacity and default selections
    pub fn new_session(&self) -> Result<SessionState> {
        let mut state = SessionState::with_history_capacity(self.history_capacity);
        state.select_aspect_ratio(&self.default_aspect_ratio)?;
        state.select_quality(&self.default_quality)?;
        Ok(state)
    }
}
