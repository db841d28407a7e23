//! Design prompt construction

use crate::core::catalog::ORIGINAL_ASPECT_RATIO;
use crate::core::providers::GenerationRequest;

/// Number of designs the prompt asks for
pub const REQUESTED_VARIATIONS: usize = 2;

/// Extra wording for a quality token
pub fn quality_hint(quality: &str) -> Option<&'static str> {
    match quality {
        "hd" => Some("Render in high definition with sharp, clean detail."),
        "ultra" => Some(
            "Render in ultra-high definition: photorealistic materials, accurate lighting and fine texture detail.",
        ),
        _ => None,
    }
}

/// Aspect ratio instruction
pub fn aspect_ratio_instruction(aspect_ratio: &str) -> String {
    if aspect_ratio == ORIGINAL_ASPECT_RATIO {
        "Keep the framing and aspect ratio of the original room photo.".to_string()
    } else {
        format!("Compose each image with a {} aspect ratio.", aspect_ratio)
    }
}

/// Build the text prompt sent with the room photo
pub fn build_design_prompt(request: &GenerationRequest) -> String {
    let space = request.space_type.as_str().to_lowercase();

    let style = if request.custom_moodboard_image.is_some() {
        "the style shown in the attached moodboard image (the second image): match its palette, materials, furniture language and mood".to_string()
    } else {
        format!("a {} style", request.style_name)
    };

    let mut lines = vec![
        format!(
            "You are an expert interior designer. The first image is a photo or sketch of a {}.",
            space
        ),
        format!(
            "Create {} distinct redesigns of this {} in {}.",
            REQUESTED_VARIATIONS, space, style
        ),
        "Preserve the room's architecture: walls, windows, doors and camera perspective stay where they are.".to_string(),
        "For each design, first write one short paragraph describing the key changes, then output the redesigned image.".to_string(),
        aspect_ratio_instruction(&request.aspect_ratio),
    ];

    if let Some(hint) = quality_hint(&request.quality) {
        lines.push(hint.to_string());
    }

    lines.join("\n")
}
