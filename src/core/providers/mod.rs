//! Design generation providers
//!
//! A provider turns one [`GenerationRequest`] into an ordered list of
//! [`DesignVariation`]s with a single call to an external service. Providers
//! never retry, cache, rate limit or batch; the session decides what to do with
//! a failure.

pub mod error;
pub mod gemini;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::catalog::SpaceType;
use crate::core::types::{DesignVariation, ImageData};

pub use error::ProviderError;
pub use gemini::GeminiClient;

/// Everything the service needs for one generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub room_image: ImageData,
    /// Style reference, present only when the custom moodboard is selected
    pub custom_moodboard_image: Option<ImageData>,
    pub space_type: SpaceType,
    pub style_name: String,
    pub aspect_ratio: String,
    pub quality: String,
}

/// One outbound call to an image generation service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DesignGenerator: Send + Sync {
    /// Generate design variations, in display order
    async fn generate_designs(
        &self,
        request: GenerationRequest,
    ) -> Result<Vec<DesignVariation>, ProviderError>;

    /// Provider name used in logs
    fn name(&self) -> &'static str;
}
