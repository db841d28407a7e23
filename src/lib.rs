//! # interior-studio
//!
//! AI interior redesign studio. Upload a photo of a room, pick a space type, a
//! style moodboard, an aspect ratio and a quality level, and get two redesigned
//! variations of the room back from Google Gemini.
//!
//! ## Features
//!
//! - **Option Catalogs**: fixed space types, moodboards, aspect ratios and quality levels
//! - **Generation Client**: one `generateContent` call per generation with a hard timeout
//! - **Session State Machine**: explicit, serializable state with a bounded result gallery
//! - **Pluggable Generators**: anything implementing [`DesignGenerator`] can drive a [`Studio`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use interior_studio::{GeminiClient, GeminiConfig, ImageData, SpaceType, Studio};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = GeminiClient::new(GeminiConfig::from_env()?)?;
//!     let studio = Studio::new(Arc::new(client));
//!
//!     studio.set_room_image(ImageData::from_file("living-room.jpg").await?);
//!     studio.select_space_type(SpaceType::LivingRoom);
//!     studio.select_moodboard("scandinavian")?;
//!
//!     for design in studio.generate().await? {
//!         println!("{}", design.description);
//!     }
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{Result, StudioError};

pub use core::catalog::{
    ASPECT_RATIOS, CatalogOption, MOODBOARDS, MoodboardOption, QUALITY_LEVELS, SpaceType,
};
pub use core::providers::gemini::{GeminiClient, GeminiConfig};
pub use core::providers::{DesignGenerator, GenerationRequest, ProviderError};
pub use core::session::{DesignHistory, SessionState, Studio, View};
pub use core::types::{DesignVariation, ImageData};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
