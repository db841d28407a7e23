//! Async orchestration around a [`SessionState`]
//!
//! The lock guarding the state is only held for the synchronous transitions,
//! never while the generator call is in flight. A generation whose future is
//! dropped (or whose generator panics) is resolved as cancelled, so the
//! session never stays loading.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{Instrument, info, info_span};
use uuid::Uuid;

use super::state::SessionState;
use crate::core::catalog::SpaceType;
use crate::core::providers::{DesignGenerator, ProviderError};
use crate::core::types::{DesignVariation, ImageData};
use crate::utils::error::Result;

/// Pending generation claimed by [`Studio::generate`]
///
/// Dropped without [`complete`](Self::complete) means the call never finished.
struct PendingGeneration<'a> {
    state: &'a Mutex<SessionState>,
    resolved: bool,
}

impl<'a> PendingGeneration<'a> {
    fn new(state: &'a Mutex<SessionState>) -> Self {
        Self {
            state,
            resolved: false,
        }
    }

    fn complete(
        mut self,
        outcome: std::result::Result<Vec<DesignVariation>, ProviderError>,
    ) -> Result<Vec<DesignVariation>> {
        self.resolved = true;
        self.state.lock().complete_generation(outcome)
    }
}

impl Drop for PendingGeneration<'_> {
    fn drop(&mut self) {
        if !self.resolved {
            self.state.lock().abandon_generation();
        }
    }
}

/// A single user's studio session bound to a design generator
pub struct Studio<G: DesignGenerator + ?Sized> {
    generator: Arc<G>,
    state: Mutex<SessionState>,
}

impl<G: DesignGenerator + ?Sized> Studio<G> {
    pub fn new(generator: Arc<G>) -> Self {
        Self::from_state(generator, SessionState::default())
    }

    /// Start from an existing state, e.g. one restored from disk
    pub fn from_state(generator: Arc<G>, state: SessionState) -> Self {
        Self {
            generator,
            state: Mutex::new(state),
        }
    }

    pub fn generator(&self) -> &Arc<G> {
        &self.generator
    }

    /// Clone of the current state
    pub fn snapshot(&self) -> SessionState {
        self.state.lock().clone()
    }

    /// Run a closure against the current state without cloning it
    pub fn with_state<R>(&self, f: impl FnOnce(&SessionState) -> R) -> R {
        f(&self.state.lock())
    }

    pub fn set_room_image(&self, image: ImageData) {
        self.state.lock().set_room_image(image);
    }

    pub fn clear_room_image(&self) {
        self.state.lock().clear_room_image();
    }

    pub fn set_custom_moodboard_image(&self, image: ImageData) {
        self.state.lock().set_custom_moodboard_image(image);
    }

    pub fn clear_custom_moodboard_image(&self) {
        self.state.lock().clear_custom_moodboard_image();
    }

    pub fn select_space_type(&self, space_type: SpaceType) {
        self.state.lock().select_space_type(space_type);
    }

    pub fn select_moodboard(&self, id: &str) -> Result<()> {
        self.state.lock().select_moodboard(id)
    }

    pub fn select_aspect_ratio(&self, aspect_ratio: &str) -> Result<()> {
        self.state.lock().select_aspect_ratio(aspect_ratio)
    }

    pub fn select_quality(&self, quality: &str) -> Result<()> {
        self.state.lock().select_quality(quality)
    }

    pub fn can_generate(&self) -> bool {
        self.state.lock().can_generate()
    }

    pub fn return_to_input(&self) -> bool {
        self.state.lock().return_to_input()
    }

    /// Run one generation from the current selections
    pub async fn generate(&self) -> Result<Vec<DesignVariation>> {
        let request = self.state.lock().begin_generation()?;
        let pending = PendingGeneration::new(&self.state);

        let span = info_span!(
            "generation",
            request_id = %Uuid::new_v4(),
            provider = self.generator.name(),
            space_type = %request.space_type,
            style = %request.style_name,
            aspect_ratio = %request.aspect_ratio,
            quality = %request.quality,
        );

        async move {
            info!(
                custom_moodboard = request.custom_moodboard_image.is_some(),
                "Generating designs"
            );
            let outcome = self.generator.generate_designs(request).await;
            pending.complete(outcome)
        }
        .instrument(span)
        .await
    }
}
