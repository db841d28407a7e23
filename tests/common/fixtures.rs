//! Test fixtures and data factories
//!
//! Provides factory methods for creating test data with sensible defaults.

use interior_studio::{DesignVariation, GenerationRequest, ImageData, SpaceType};
use serde_json::{Value, json};

/// Tiny valid PNG header, enough to stand in for a photo
const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

/// Room photo fixture
pub fn room_image() -> ImageData {
    ImageData::from_bytes(PNG_BYTES, "image/png").unwrap()
}

/// Custom moodboard fixture
pub fn moodboard_image() -> ImageData {
    ImageData::from_bytes(b"moodboard", "image/jpeg").unwrap()
}

/// `count` distinct design variations
pub fn designs(count: usize) -> Vec<DesignVariation> {
    (0..count)
        .map(|i| {
            DesignVariation::from_inline("image/png", "iVBORw0KGgo=", format!("Design {}", i + 1))
        })
        .collect()
}

/// Request for a living room in the default style
pub fn generation_request() -> GenerationRequest {
    GenerationRequest {
        room_image: room_image(),
        custom_moodboard_image: None,
        space_type: SpaceType::LivingRoom,
        style_name: "Minimalist".to_string(),
        aspect_ratio: "original".to_string(),
        quality: "standard".to_string(),
    }
}

/// `generateContent` response carrying `count` described images
pub fn gemini_response(count: usize) -> Value {
    let parts: Vec<Value> = (0..count)
        .flat_map(|i| {
            [
                json!({ "text": format!("Design {}: layered textures.", i + 1) }),
                json!({ "inlineData": { "mimeType": "image/png", "data": "iVBORw0KGgo=" } }),
            ]
        })
        .collect();

    json!({
        "candidates": [{
            "content": { "role": "model", "parts": parts },
            "finishReason": "STOP"
        }]
    })
}

/// Google API error envelope
pub fn gemini_error(code: u16, status: &str, message: &str) -> Value {
    json!({
        "error": {
            "code": code,
            "message": message,
            "status": status
        }
    })
}
