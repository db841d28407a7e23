//! Error handling for the studio
//!
//! This module defines all error types used throughout the studio. The display
//! text of the generation-related variants is exactly what the session stores in
//! its `error` slot, so those strings are user-facing.

#![allow(missing_docs)]

use crate::core::providers::ProviderError;
use thiserror::Error;

/// Result type alias for the studio
pub type Result<T> = std::result::Result<T, StudioError>;

/// Main error type for the studio
#[derive(Error, Debug)]
pub enum StudioError {
    /// No room image uploaded before generating
    #[error("Please upload a room image.")]
    MissingRoomImage,

    /// Custom moodboard selected without a reference image
    #[error("Please upload a custom moodboard image.")]
    MissingCustomMoodboard,

    /// The service answered but produced fewer than two designs
    #[error(
        "Could not generate two distinct designs. The model may have returned a limited response. Please try again."
    )]
    InsufficientResults { received: usize },

    /// The generation service failed
    #[error("An error occurred while generating designs: {}", .0.detail())]
    Provider(ProviderError),

    /// A generation is already pending
    #[error("A design generation is already in progress")]
    GenerationInProgress,

    /// The pending generation was dropped before the service answered
    #[error("Design generation was cancelled. Please try again.")]
    GenerationCancelled,

    /// A generation result arrived with no generation pending
    #[error("No design generation is pending")]
    NoPendingGeneration,

    /// A selection outside its catalog
    #[error("Invalid {kind}: '{value}'")]
    InvalidSelection { kind: &'static str, value: String },

    /// Image payload rejected
    #[error("Invalid image: {0}")]
    InvalidImage(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StudioError {
    /// Create an invalid selection error
    pub fn invalid_selection(kind: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidSelection {
            kind,
            value: value.into(),
        }
    }

    /// Local precondition failures raised before any service call
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::MissingRoomImage | Self::MissingCustomMoodboard)
    }

    /// Failures of a generation that actually reached the service
    pub fn is_generation_failure(&self) -> bool {
        matches!(self, Self::InsufficientResults { .. } | Self::Provider(_))
    }
}

impl From<ProviderError> for StudioError {
    fn from(err: ProviderError) -> Self {
        Self::Provider(err)
    }
}
