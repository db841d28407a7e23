//! Session state and its transitions
//!
//! [`SessionState`] is a plain serializable value. Every user action and every
//! generation outcome is a method on it, so flows can be driven and checked
//! without a renderer or a network.

use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use super::history::{DesignHistory, ResultSet};
use crate::core::catalog::{
    self, MoodboardOption, ORIGINAL_ASPECT_RATIO, STANDARD_QUALITY, SpaceType,
};
use crate::core::providers::{GenerationRequest, ProviderError};
use crate::core::types::{DesignVariation, ImageData};
use crate::utils::error::{Result, StudioError};

/// Fewest variations a generation must produce to count as a success
pub const MIN_DESIGN_VARIATIONS: usize = 2;

/// Which screen is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Accepting selections
    #[default]
    Input,
    /// Showing the last generation (loading, failed or succeeded)
    Results,
}

/// Everything one studio session knows
///
/// Deserializing checks selections against the catalogs. A snapshot taken
/// mid-generation restores with that generation resolved as cancelled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "SessionSnapshot")]
pub struct SessionState {
    view: View,
    room_image: Option<ImageData>,
    space_type: SpaceType,
    moodboard: MoodboardOption,
    custom_moodboard_image: Option<ImageData>,
    aspect_ratio: String,
    quality: String,
    is_loading: bool,
    error: Option<String>,
    current_results: Vec<DesignVariation>,
    history: DesignHistory,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            view: View::Input,
            room_image: None,
            space_type: SpaceType::default(),
            moodboard: MoodboardOption::default(),
            custom_moodboard_image: None,
            aspect_ratio: ORIGINAL_ASPECT_RATIO.to_string(),
            quality: STANDARD_QUALITY.to_string(),
            is_loading: false,
            error: None,
            current_results: Vec::new(),
            history: DesignHistory::default(),
        }
    }
}

/// Serialized form of [`SessionState`] before validation
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionSnapshot {
    view: View,
    room_image: Option<ImageData>,
    space_type: SpaceType,
    moodboard: MoodboardOption,
    custom_moodboard_image: Option<ImageData>,
    aspect_ratio: String,
    quality: String,
    #[serde(default)]
    is_loading: bool,
    error: Option<String>,
    current_results: Vec<DesignVariation>,
    history: DesignHistory,
}

impl TryFrom<SessionSnapshot> for SessionState {
    type Error = StudioError;

    fn try_from(snapshot: SessionSnapshot) -> Result<Self> {
        let moodboard = catalog::find_moodboard(&snapshot.moodboard.id)
            .ok_or_else(|| {
                StudioError::invalid_selection("moodboard", snapshot.moodboard.id.to_string())
            })?
            .clone();
        if !catalog::is_aspect_ratio(&snapshot.aspect_ratio) {
            return Err(StudioError::invalid_selection(
                "aspect ratio",
                snapshot.aspect_ratio,
            ));
        }
        if !catalog::is_quality(&snapshot.quality) {
            return Err(StudioError::invalid_selection("quality", snapshot.quality));
        }

        let mut state = Self {
            view: snapshot.view,
            room_image: snapshot.room_image,
            space_type: snapshot.space_type,
            moodboard,
            custom_moodboard_image: snapshot.custom_moodboard_image,
            aspect_ratio: snapshot.aspect_ratio,
            quality: snapshot.quality,
            is_loading: snapshot.is_loading,
            error: snapshot.error,
            current_results: snapshot.current_results,
            history: snapshot.history,
        };
        state.abandon_generation();
        Ok(state)
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh session keeping at most `capacity` past result sets
    pub fn with_history_capacity(capacity: usize) -> Self {
        Self {
            history: DesignHistory::with_capacity(capacity),
            ..Self::default()
        }
    }

    // ==================== Accessors ====================

    pub fn view(&self) -> View {
        self.view
    }

    pub fn room_image(&self) -> Option<&ImageData> {
        self.room_image.as_ref()
    }

    pub fn space_type(&self) -> SpaceType {
        self.space_type
    }

    pub fn moodboard(&self) -> &MoodboardOption {
        &self.moodboard
    }

    pub fn custom_moodboard_image(&self) -> Option<&ImageData> {
        self.custom_moodboard_image.as_ref()
    }

    pub fn aspect_ratio(&self) -> &str {
        &self.aspect_ratio
    }

    pub fn quality(&self) -> &str {
        &self.quality
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn current_results(&self) -> &[DesignVariation] {
        &self.current_results
    }

    pub fn history(&self) -> &DesignHistory {
        &self.history
    }

    /// Most recent successful result set
    pub fn latest_results(&self) -> Option<&ResultSet> {
        self.history.latest()
    }

    // ==================== Selections ====================

    pub fn set_room_image(&mut self, image: ImageData) {
        self.room_image = Some(image);
    }

    pub fn clear_room_image(&mut self) {
        self.room_image = None;
    }

    pub fn set_custom_moodboard_image(&mut self, image: ImageData) {
        self.custom_moodboard_image = Some(image);
    }

    pub fn clear_custom_moodboard_image(&mut self) {
        self.custom_moodboard_image = None;
    }

    pub fn select_space_type(&mut self, space_type: SpaceType) {
        self.space_type = space_type;
    }

    /// Select a moodboard by id. Leaves any custom image in place.
    pub fn select_moodboard(&mut self, id: &str) -> Result<()> {
        let moodboard = catalog::find_moodboard(id)
            .ok_or_else(|| StudioError::invalid_selection("moodboard", id))?;
        self.moodboard = moodboard.clone();
        Ok(())
    }

    pub fn select_aspect_ratio(&mut self, aspect_ratio: &str) -> Result<()> {
        if !catalog::is_aspect_ratio(aspect_ratio) {
            return Err(StudioError::invalid_selection("aspect ratio", aspect_ratio));
        }
        self.aspect_ratio = aspect_ratio.to_string();
        Ok(())
    }

    pub fn select_quality(&mut self, quality: &str) -> Result<()> {
        if !catalog::is_quality(quality) {
            return Err(StudioError::invalid_selection("quality", quality));
        }
        self.quality = quality.to_string();
        Ok(())
    }

    // ==================== Generation ====================

    /// Whether a generate action would pass its preconditions
    pub fn can_generate(&self) -> bool {
        !self.is_loading && self.check_preconditions().is_ok()
    }

    fn check_preconditions(&self) -> Result<&ImageData> {
        let room_image = self.room_image.as_ref().ok_or(StudioError::MissingRoomImage)?;
        if self.moodboard.is_custom() && self.custom_moodboard_image.is_none() {
            return Err(StudioError::MissingCustomMoodboard);
        }
        Ok(room_image)
    }

    /// Start a generation.
    ///
    /// Rejected without touching state while another generation is pending.
    /// A failed precondition records its message in `error` and keeps the
    /// current view. On success the session shows a loading results view and
    /// the returned request is what must be sent to the generator.
    pub fn begin_generation(&mut self) -> Result<GenerationRequest> {
        if self.is_loading {
            warn!("Generation requested while another is pending");
            return Err(StudioError::GenerationInProgress);
        }

        let room_image = match self.check_preconditions() {
            Ok(image) => image.clone(),
            Err(err) => {
                self.error = Some(err.to_string());
                return Err(err);
            }
        };

        let custom_moodboard_image = if self.moodboard.is_custom() {
            self.custom_moodboard_image.clone()
        } else {
            None
        };

        self.is_loading = true;
        self.error = None;
        self.current_results.clear();
        self.view = View::Results;

        Ok(GenerationRequest {
            room_image,
            custom_moodboard_image,
            space_type: self.space_type,
            style_name: self.moodboard.name.to_string(),
            aspect_ratio: self.aspect_ratio.clone(),
            quality: self.quality.clone(),
        })
    }

    /// Resolve the pending generation with the generator's outcome
    pub fn complete_generation(
        &mut self,
        outcome: std::result::Result<Vec<DesignVariation>, ProviderError>,
    ) -> Result<Vec<DesignVariation>> {
        if !self.is_loading {
            warn!("Generation outcome arrived with nothing pending");
            return Err(StudioError::NoPendingGeneration);
        }
        self.is_loading = false;

        match outcome {
            Ok(designs) if designs.len() >= MIN_DESIGN_VARIATIONS => {
                info!(designs = designs.len(), "Design generation succeeded");
                self.current_results = designs.clone();
                if self.history.push(designs.clone()).is_some() {
                    info!(
                        capacity = self.history.capacity(),
                        "Oldest gallery entry evicted"
                    );
                }
                self.error = None;
                Ok(designs)
            }
            Ok(designs) => {
                warn!(
                    received = designs.len(),
                    required = MIN_DESIGN_VARIATIONS,
                    "Generation returned too few designs"
                );
                let err = StudioError::InsufficientResults {
                    received: designs.len(),
                };
                self.current_results.clear();
                self.error = Some(err.to_string());
                Err(err)
            }
            Err(provider_error) => {
                error!(
                    provider = provider_error.provider(),
                    error = %provider_error,
                    "Design generation failed"
                );
                let err = StudioError::Provider(provider_error);
                self.current_results.clear();
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Resolve the pending generation without an outcome, e.g. when the call
    /// was dropped. Returns `false` when nothing was pending.
    pub fn abandon_generation(&mut self) -> bool {
        if !self.is_loading {
            return false;
        }
        warn!("Pending generation abandoned before the service answered");
        self.is_loading = false;
        self.current_results.clear();
        self.error = Some(StudioError::GenerationCancelled.to_string());
        true
    }

    /// Go back to the input view. Ignored while a generation is pending.
    pub fn return_to_input(&mut self) -> bool {
        if self.is_loading {
            warn!("Cannot leave results while a generation is pending");
            return false;
        }
        self.view = View::Input;
        true
    }
}
