//! Generated design variations

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use crate::utils::error::{Result, StudioError};

/// One redesigned version of the room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignVariation {
    /// `data:` URI or remote URL of the rendered image
    pub image: String,
    /// What the model says it changed
    pub description: String,
}

impl DesignVariation {
    pub fn new(image: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            description: description.into(),
        }
    }

    /// Build a variation from an inline base64 payload
    pub fn from_inline(mime_type: &str, data: &str, description: impl Into<String>) -> Self {
        Self::new(format!("data:{};base64,{}", mime_type, data), description)
    }

    pub fn is_data_uri(&self) -> bool {
        self.image.starts_with("data:")
    }

    /// Decode a `data:` URI image into its media type and bytes
    pub fn decode_image(&self) -> Result<(String, Vec<u8>)> {
        let rest = self.image.strip_prefix("data:").ok_or_else(|| {
            StudioError::InvalidImage("design image is not a data URI".to_string())
        })?;
        let (header, payload) = rest.split_once(',').ok_or_else(|| {
            StudioError::InvalidImage("data URI has no payload".to_string())
        })?;
        let mime_type = header
            .strip_suffix(";base64")
            .ok_or_else(|| StudioError::InvalidImage("data URI is not base64".to_string()))?;
        let bytes = STANDARD
            .decode(payload)
            .map_err(|e| StudioError::InvalidImage(format!("bad base64 payload: {}", e)))?;
        Ok((mime_type.to_string(), bytes))
    }
}
