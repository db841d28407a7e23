//! Session flows driven through `Studio`

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use interior_studio::{
        DesignGenerator, DesignVariation, GenerationRequest, ProviderError, SessionState,
        SpaceType, Studio, StudioError, View,
    };
    use tokio::sync::{Notify, oneshot};

    use crate::common::{ScriptedGenerator, designs, moodboard_image, room_image};
    use crate::{assert_err, assert_ok};

    const INSUFFICIENT: &str = "Could not generate two distinct designs. The model may have returned a limited response. Please try again.";

    fn studio(generator: ScriptedGenerator) -> (Arc<ScriptedGenerator>, Studio<ScriptedGenerator>) {
        let generator = Arc::new(generator);
        (Arc::clone(&generator), Studio::new(generator))
    }

    #[tokio::test]
    async fn test_missing_room_image_never_calls_service() {
        let (generator, studio) = studio(ScriptedGenerator::succeeding(2));

        let err = assert_err!(studio.generate().await);
        assert!(err.is_validation());
        assert_eq!(generator.calls(), 0);

        let state = studio.snapshot();
        assert_eq!(state.error(), Some("Please upload a room image."));
        assert_eq!(state.view(), View::Input);
        assert!(!state.is_loading());
    }

    #[tokio::test]
    async fn test_custom_moodboard_without_image_never_calls_service() {
        let (generator, studio) = studio(ScriptedGenerator::succeeding(2));
        studio.set_room_image(room_image());
        assert_ok!(studio.select_moodboard("custom"));

        let err = assert_err!(studio.generate().await);
        assert!(matches!(err, StudioError::MissingCustomMoodboard));
        assert_eq!(generator.calls(), 0);
        assert_eq!(
            studio.snapshot().error(),
            Some("Please upload a custom moodboard image.")
        );
    }

    #[tokio::test]
    async fn test_success_stores_results_in_order() {
        let (_, studio) = studio(ScriptedGenerator::succeeding(3));
        studio.set_room_image(room_image());

        let returned = assert_ok!(studio.generate().await);

        let state = studio.snapshot();
        assert_eq!(state.current_results(), returned.as_slice());
        assert_eq!(state.current_results(), designs(3).as_slice());
        assert!(state.error().is_none());
        assert_eq!(state.history().latest(), Some(&designs(3)));
    }

    #[tokio::test]
    async fn test_fewer_than_two_designs_is_an_error() {
        for count in [0, 1] {
            let (_, studio) = studio(ScriptedGenerator::succeeding(count));
            studio.set_room_image(room_image());

            let err = assert_err!(studio.generate().await);
            assert!(matches!(err, StudioError::InsufficientResults { .. }));

            let state = studio.snapshot();
            assert_eq!(state.error(), Some(INSUFFICIENT));
            assert!(state.current_results().is_empty());
            assert!(state.history().is_empty());
        }
    }

    #[tokio::test]
    async fn test_history_keeps_ten_most_recent() {
        let outcomes = (0..11).map(|round| {
            Ok(vec![
                DesignVariation::new(format!("round-{}-a", round), "a"),
                DesignVariation::new(format!("round-{}-b", round), "b"),
            ])
        });
        let (_, studio) = studio(ScriptedGenerator::new(outcomes));
        studio.set_room_image(room_image());

        for _ in 0..11 {
            assert_ok!(studio.generate().await);
            assert!(studio.return_to_input());
        }

        let state = studio.snapshot();
        assert_eq!(state.history().len(), 10);
        assert!(
            state
                .history()
                .iter()
                .all(|set| set[0].image != "round-0-a")
        );
        assert_eq!(state.history().latest().unwrap()[0].image, "round-10-a");
    }

    /// Reports when the call starts and waits to be released
    struct ProbeGenerator {
        started: parking_lot::Mutex<Option<oneshot::Sender<()>>>,
        release: Notify,
    }

    #[async_trait]
    impl DesignGenerator for ProbeGenerator {
        async fn generate_designs(
            &self,
            _request: GenerationRequest,
        ) -> Result<Vec<DesignVariation>, ProviderError> {
            if let Some(started) = self.started.lock().take() {
                let _ = started.send(());
            }
            self.release.notified().await;
            Err(ProviderError::network("probe", "connection reset"))
        }

        fn name(&self) -> &'static str {
            "probe"
        }
    }

    #[tokio::test]
    async fn test_loading_only_while_call_pending() {
        let (started_tx, started_rx) = oneshot::channel();
        let generator = Arc::new(ProbeGenerator {
            started: parking_lot::Mutex::new(Some(started_tx)),
            release: Notify::new(),
        });
        let studio = Arc::new(Studio::new(Arc::clone(&generator)));
        studio.set_room_image(room_image());
        assert!(!studio.snapshot().is_loading());

        let pending = {
            let studio = Arc::clone(&studio);
            tokio::spawn(async move { studio.generate().await })
        };

        started_rx.await.unwrap();
        assert!(studio.snapshot().is_loading());
        assert!(!studio.can_generate());

        // A second generate is rejected while the first is pending
        let err = assert_err!(studio.generate().await);
        assert!(matches!(err, StudioError::GenerationInProgress));

        generator.release.notify_one();
        let err = assert_err!(pending.await.unwrap());
        assert!(err.is_generation_failure());
        assert!(!studio.snapshot().is_loading());
    }

    #[tokio::test]
    async fn test_error_survives_return_to_input_until_next_success() {
        let (_, studio) = studio(ScriptedGenerator::new([
            Err(ProviderError::api_error("scripted", 500, "")),
            Ok(designs(2)),
        ]));
        studio.set_room_image(room_image());

        assert_err!(studio.generate().await);
        assert_eq!(
            studio.snapshot().error(),
            Some("An error occurred while generating designs: An unknown error occurred.")
        );

        assert!(studio.return_to_input());
        let state = studio.snapshot();
        assert_eq!(state.view(), View::Input);
        assert!(state.error().is_some());

        assert_ok!(studio.generate().await);
        assert!(studio.snapshot().error().is_none());
    }

    #[tokio::test]
    async fn test_non_custom_moodboard_keeps_custom_image() {
        let (generator, studio) = studio(ScriptedGenerator::succeeding(2));
        studio.set_room_image(room_image());
        studio.set_custom_moodboard_image(moodboard_image());
        assert_ok!(studio.select_moodboard("custom"));
        assert_ok!(studio.select_moodboard("bohemian"));

        assert_eq!(
            studio.snapshot().custom_moodboard_image(),
            Some(&moodboard_image())
        );

        assert_ok!(studio.generate().await);
        assert!(studio.return_to_input());
        assert_ok!(studio.select_moodboard("custom"));
        assert_ok!(studio.generate().await);

        let requests = generator.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].style_name, "Bohemian");
        assert!(requests[0].custom_moodboard_image.is_none());
        assert_eq!(requests[1].custom_moodboard_image, Some(moodboard_image()));
    }

    #[tokio::test]
    async fn test_selections_survive_round_trip() {
        let (_, studio) = studio(ScriptedGenerator::succeeding(2));
        studio.set_room_image(room_image());
        studio.select_space_type(SpaceType::Kitchen);
        assert_ok!(studio.select_moodboard("farmhouse"));
        assert_ok!(studio.select_aspect_ratio("4:3"));
        assert_ok!(studio.select_quality("hd"));

        assert_ok!(studio.generate().await);
        assert!(studio.return_to_input());

        let state = studio.snapshot();
        assert_eq!(state.space_type(), SpaceType::Kitchen);
        assert_eq!(state.moodboard().id, "farmhouse");
        assert_eq!(state.aspect_ratio(), "4:3");
        assert_eq!(state.quality(), "hd");
        assert_eq!(state.current_results().len(), 2);
    }

    #[tokio::test]
    async fn test_restored_state_continues() {
        let (_, first) = studio(ScriptedGenerator::succeeding(2));
        first.set_room_image(room_image());
        assert_ok!(first.generate().await);

        let json = serde_json::to_string(&first.snapshot()).unwrap();
        let restored: SessionState = serde_json::from_str(&json).unwrap();

        let studio = Studio::from_state(Arc::new(ScriptedGenerator::succeeding(2)), restored);
        assert!(studio.return_to_input());
        assert_ok!(studio.generate().await);
        assert_eq!(studio.snapshot().history().len(), 2);
    }
}
