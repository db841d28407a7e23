//! Uploaded image payloads

use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use crate::utils::error::{Result, StudioError};

/// An uploaded image: base64 payload plus media type.
///
/// Immutable once built. The session never decodes it; the payload is handed
/// to the generation service as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageData {
    data: String,
    mime_type: String,
}

impl ImageData {
    /// Wrap an already base64-encoded payload
    pub fn new(data: impl Into<String>, mime_type: impl Into<String>) -> Result<Self> {
        let data = data.into();
        let mime_type = mime_type.into();

        if data.trim().is_empty() {
            return Err(StudioError::InvalidImage("image payload is empty".to_string()));
        }
        if !mime_type.starts_with("image/") {
            return Err(StudioError::InvalidImage(format!(
                "unsupported media type '{}'",
                mime_type
            )));
        }

        Ok(Self { data, mime_type })
    }

    /// Encode raw bytes
    pub fn from_bytes(bytes: &[u8], mime_type: impl Into<String>) -> Result<Self> {
        Self::new(STANDARD.encode(bytes), mime_type)
    }

    /// Read an image file, inferring the media type from its extension
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mime_type = mime_type_for_path(path).ok_or_else(|| {
            StudioError::InvalidImage(format!(
                "cannot infer image type of {}",
                path.display()
            ))
        })?;
        let bytes = tokio::fs::read(path).await?;
        Self::from_bytes(&bytes, mime_type)
    }

    /// Base64 payload
    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// `data:` URI suitable for an `<img src>`
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }

    /// Approximate decoded size in bytes
    pub fn decoded_len(&self) -> usize {
        let padding = self.data.bytes().rev().take_while(|b| *b == b'=').count();
        (self.data.len() / 4 * 3).saturating_sub(padding)
    }
}

fn mime_type_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "webp" => Some("image/webp"),
        "gif" => Some("image/gif"),
        "heic" => Some("image/heic"),
        "heif" => Some("image/heif"),
        _ => None,
    }
}
