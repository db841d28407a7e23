//! Gemini Error Handling
//!
//! Maps HTTP statuses and Google API error envelopes onto [`ProviderError`].

use serde_json::Value;

use crate::core::providers::ProviderError;

pub(crate) const PROVIDER: &str = "gemini";

/// Maps Gemini failures to provider errors
pub struct GeminiErrorMapper;

impl GeminiErrorMapper {
    /// Error for a non-success HTTP status
    pub fn from_http_status(status: u16, body: &str) -> ProviderError {
        let envelope = serde_json::from_str::<Value>(body).ok();
        let message = envelope
            .as_ref()
            .and_then(|json| json.get("error"))
            .and_then(|error| error.get("message"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| body.trim().to_string());

        match status {
            400 => ProviderError::invalid_request(PROVIDER, message),
            401 | 403 => ProviderError::authentication(PROVIDER, message),
            404 => ProviderError::model_not_found(PROVIDER, message),
            429 => {
                let retry_after = envelope.as_ref().and_then(Self::extract_retry_after);
                if message.is_empty() {
                    ProviderError::rate_limit(PROVIDER, retry_after)
                } else {
                    ProviderError::rate_limit_with_message(PROVIDER, message, retry_after)
                }
            }
            503 => ProviderError::provider_unavailable(PROVIDER, message),
            _ => ProviderError::api_error(PROVIDER, status, message),
        }
    }

    /// Error for a 200 response that still carries an `error` object
    pub fn from_api_response(response: &Value) -> ProviderError {
        let Some(error) = response.get("error") else {
            return ProviderError::api_error(PROVIDER, 500, "Unknown API error");
        };

        let code = error
            .get("code")
            .and_then(Value::as_u64)
            .and_then(|code| u16::try_from(code).ok())
            .unwrap_or(500);
        let message = error
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("Unknown error");
        let status = error.get("status").and_then(Value::as_str).unwrap_or("");

        match (code, status) {
            (401, _) | (_, "UNAUTHENTICATED") | (403, _) | (_, "PERMISSION_DENIED") => {
                ProviderError::authentication(PROVIDER, message)
            }
            (400, _) | (_, "INVALID_ARGUMENT") | (_, "FAILED_PRECONDITION") => {
                ProviderError::invalid_request(PROVIDER, message)
            }
            (404, _) | (_, "NOT_FOUND") => ProviderError::model_not_found(PROVIDER, message),
            (429, _) | (_, "RESOURCE_EXHAUSTED") => ProviderError::rate_limit_with_message(
                PROVIDER,
                message,
                Self::extract_retry_after(response),
            ),
            (503, _) | (_, "UNAVAILABLE") => ProviderError::provider_unavailable(PROVIDER, message),
            _ => ProviderError::api_error(PROVIDER, code, message),
        }
    }

    /// Retry delay from `error.details[].retryDelay` ("30s") or a bare `retry_after`
    fn extract_retry_after(json: &Value) -> Option<u64> {
        let error = json.get("error")?;

        if let Some(retry_after) = error.get("retry_after").and_then(Value::as_u64) {
            return Some(retry_after);
        }

        error
            .get("details")
            .and_then(Value::as_array)?
            .iter()
            .filter_map(|detail| detail.get("retryDelay").and_then(Value::as_str))
            .find_map(|delay| delay.trim_end_matches('s').parse::<f64>().ok())
            .map(|secs| secs.ceil() as u64)
    }
}

pub fn gemini_config_error(msg: impl Into<String>) -> ProviderError {
    ProviderError::configuration(PROVIDER, msg)
}

pub fn gemini_network_error(msg: impl Into<String>) -> ProviderError {
    ProviderError::network(PROVIDER, msg)
}

pub fn gemini_parse_error(msg: impl Into<String>) -> ProviderError {
    ProviderError::response_parsing(PROVIDER, msg)
}

pub fn gemini_safety_error(reason: impl Into<String>) -> ProviderError {
    ProviderError::content_filtered(PROVIDER, reason)
}
