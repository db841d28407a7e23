//! Request and response transformation for `generateContent`

use serde::Deserialize;
use serde_json::{Value, json};

use super::error::{gemini_parse_error, gemini_safety_error};
use super::prompt::build_design_prompt;
use crate::core::catalog::ORIGINAL_ASPECT_RATIO;
use crate::core::providers::{GenerationRequest, ProviderError};
use crate::core::types::{DesignVariation, ImageData};

/// Finish reasons that mean the output was withheld
const BLOCKING_FINISH_REASONS: &[&str] = &[
    "SAFETY",
    "PROHIBITED_CONTENT",
    "BLOCKLIST",
    "SPII",
    "IMAGE_SAFETY",
    "RECITATION",
];

fn inline_part(image: &ImageData) -> Value {
    json!({
        "inlineData": {
            "mimeType": image.mime_type(),
            "data": image.data()
        }
    })
}

/// Build the `generateContent` request body
pub fn build_request_body(request: &GenerationRequest) -> Value {
    let mut parts = vec![
        json!({ "text": build_design_prompt(request) }),
        inline_part(&request.room_image),
    ];

    if let Some(moodboard) = &request.custom_moodboard_image {
        parts.push(json!({ "text": "Style reference moodboard:" }));
        parts.push(inline_part(moodboard));
    }

    let mut generation_config = json!({
        "responseModalities": ["TEXT", "IMAGE"]
    });

    if request.aspect_ratio != ORIGINAL_ASPECT_RATIO {
        generation_config["imageConfig"] = json!({ "aspectRatio": request.aspect_ratio });
    }

    json!({
        "contents": [{
            "role": "user",
            "parts": parts
        }],
        "generationConfig": generation_config
    })
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<Content>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    text: Option<String>,
    inline_data: Option<InlineData>,
    #[serde(default)]
    thought: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

/// Pairs descriptions with images as parts stream in
#[derive(Default)]
struct DesignCollector {
    designs: Vec<DesignVariation>,
    pending_text: String,
}

impl DesignCollector {
    fn push_text(&mut self, text: &str) {
        if let Some(last) = self.designs.last_mut() {
            if last.description.is_empty() && self.pending_text.trim().is_empty() {
                last.description = text.trim().to_string();
                return;
            }
        }
        self.pending_text.push_str(text);
    }

    fn push_image(&mut self, inline: &InlineData) {
        let description = std::mem::take(&mut self.pending_text).trim().to_string();
        self.designs.push(DesignVariation::from_inline(
            &inline.mime_type,
            &inline.data,
            description,
        ));
    }

    fn finish(self) -> Vec<DesignVariation> {
        self.designs
    }
}

/// Turn a `generateContent` response into design variations.
///
/// Text preceding an image becomes its description; text following an image
/// that has none yet is attached to it. Returning fewer than two designs is not
/// an error here.
pub fn parse_designs(response: Value) -> Result<Vec<DesignVariation>, ProviderError> {
    let parsed: GenerateContentResponse = serde_json::from_value(response)
        .map_err(|e| gemini_parse_error(format!("Unexpected response shape: {}", e)))?;

    if parsed.candidates.is_empty() {
        if let Some(reason) = parsed.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(gemini_safety_error(format!("prompt blocked ({})", reason)));
        }
        return Ok(Vec::new());
    }

    let mut collector = DesignCollector::default();
    let mut blocked_reason = None;

    for candidate in &parsed.candidates {
        if let Some(content) = &candidate.content {
            for part in content.parts.iter().filter(|p| !p.thought) {
                if let Some(inline) = &part.inline_data {
                    collector.push_image(inline);
                } else if let Some(text) = &part.text {
                    collector.push_text(text);
                }
            }
        }

        if let Some(reason) = candidate.finish_reason.as_deref() {
            if BLOCKING_FINISH_REASONS.contains(&reason) {
                blocked_reason.get_or_insert_with(|| reason.to_string());
            }
        }
    }

    let designs = collector.finish();
    if designs.is_empty() {
        if let Some(reason) = blocked_reason {
            return Err(gemini_safety_error(format!("generation stopped ({})", reason)));
        }
    }

    Ok(designs)
}
