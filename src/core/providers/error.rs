//! Provider error handling
//!
//! Single error type returned by every [`DesignGenerator`](super::DesignGenerator).
//!
//! | Variant | Purpose | HTTP Status | Retryable |
//! |------|------|------------|--------|
//! | Authentication | Missing or rejected API key | 401/403 | No |
//! | RateLimit | Rate limit or quota exhausted | 429 | Yes (after delay) |
//! | ModelNotFound | Unknown model or endpoint | 404 | No |
//! | InvalidRequest | Request rejected by the service | 400 | No |
//! | ContentFiltered | Blocked by safety systems | 200/400 | No |
//! | Network | Transport failure | - | Yes |
//! | Timeout | Call exceeded the configured timeout | - | Yes |
//! | ProviderUnavailable | Service unavailable | 503 | Yes |
//! | ApiError | Any other non-success status | any | 5xx only |
//! | ResponseParsing | Body did not have the expected shape | 200 | No |
//! | Configuration | Client could not be built | - | No |
//!
//! Nothing in this crate retries. [`ProviderError::is_retryable`] only tells a
//! caller whether asking the user to try again makes sense.

/// Fallback text used when a failure carries no message
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred.";

/// Unified provider error type
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProviderError {
    #[error("Authentication failed for {provider}: {message}")]
    Authentication {
        provider: &'static str,
        message: String,
    },

    #[error("Rate limit exceeded for {provider}: {message}")]
    RateLimit {
        provider: &'static str,
        message: String,
        retry_after: Option<u64>,
    },

    #[error("Model '{model}' not found for {provider}")]
    ModelNotFound {
        provider: &'static str,
        model: String,
    },

    #[error("Invalid request for {provider}: {message}")]
    InvalidRequest {
        provider: &'static str,
        message: String,
    },

    #[error("Content filtered by {provider} safety systems: {reason}")]
    ContentFiltered {
        provider: &'static str,
        reason: String,
    },

    #[error("Network error for {provider}: {message}")]
    Network {
        provider: &'static str,
        message: String,
    },

    #[error("Timeout for {provider}: {message}")]
    Timeout {
        provider: &'static str,
        message: String,
    },

    #[error("Provider {provider} is unavailable: {message}")]
    ProviderUnavailable {
        provider: &'static str,
        message: String,
    },

    #[error("API error for {provider} (status {status}): {message}")]
    ApiError {
        provider: &'static str,
        status: u16,
        message: String,
    },

    #[error("Failed to parse {provider} response: {message}")]
    ResponseParsing {
        provider: &'static str,
        message: String,
    },

    #[error("Configuration error for {provider}: {message}")]
    Configuration {
        provider: &'static str,
        message: String,
    },
}

impl ProviderError {
    /// Create authentication error
    pub fn authentication(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Authentication {
            provider,
            message: message.into(),
        }
    }

    /// Create rate limit error
    pub fn rate_limit(provider: &'static str, retry_after: Option<u64>) -> Self {
        Self::RateLimit {
            provider,
            message: match retry_after {
                Some(seconds) => format!("Rate limit exceeded. Retry after {} seconds", seconds),
                None => "Rate limit exceeded".to_string(),
            },
            retry_after,
        }
    }

    /// Create rate limit error with a service-supplied message
    pub fn rate_limit_with_message(
        provider: &'static str,
        message: impl Into<String>,
        retry_after: Option<u64>,
    ) -> Self {
        Self::RateLimit {
            provider,
            message: message.into(),
            retry_after,
        }
    }

    /// Create model not found error
    pub fn model_not_found(provider: &'static str, model: impl Into<String>) -> Self {
        Self::ModelNotFound {
            provider,
            model: model.into(),
        }
    }

    /// Create invalid request error
    pub fn invalid_request(provider: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            provider,
            message: message.into(),
        }
    }

    /// Create content filtered error
    pub fn content_filtered(provider: &'static str, reason: impl Into<String>) -> Self {
        Self::ContentFiltered {
            provider,
            reason: reason.into(),
        }
    }

    /// Create network error
    pub fn network(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Network {
            provider,
            message: message.into(),
        }
    }

    /// Create timeout error
    pub fn timeout(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Timeout {
            provider,
            message: message.into(),
        }
    }

    /// Create provider unavailable error
    pub fn provider_unavailable(provider: &'static str, message: impl Into<String>) -> Self {
        Self::ProviderUnavailable {
            provider,
            message: message.into(),
        }
    }

    /// Create API error with status code
    pub fn api_error(provider: &'static str, status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            provider,
            status,
            message: message.into(),
        }
    }

    /// Create response parsing error
    pub fn response_parsing(provider: &'static str, message: impl Into<String>) -> Self {
        Self::ResponseParsing {
            provider,
            message: message.into(),
        }
    }

    /// Create configuration error
    pub fn configuration(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Configuration {
            provider,
            message: message.into(),
        }
    }

    /// Name of the provider that produced the error
    pub fn provider(&self) -> &'static str {
        match self {
            Self::Authentication { provider, .. }
            | Self::RateLimit { provider, .. }
            | Self::ModelNotFound { provider, .. }
            | Self::InvalidRequest { provider, .. }
            | Self::ContentFiltered { provider, .. }
            | Self::Network { provider, .. }
            | Self::Timeout { provider, .. }
            | Self::ProviderUnavailable { provider, .. }
            | Self::ApiError { provider, .. }
            | Self::ResponseParsing { provider, .. }
            | Self::Configuration { provider, .. } => provider,
        }
    }

    /// Raw message carried by the error, without the provider prefix
    pub fn message(&self) -> &str {
        match self {
            Self::Authentication { message, .. }
            | Self::RateLimit { message, .. }
            | Self::InvalidRequest { message, .. }
            | Self::Network { message, .. }
            | Self::Timeout { message, .. }
            | Self::ProviderUnavailable { message, .. }
            | Self::ApiError { message, .. }
            | Self::ResponseParsing { message, .. }
            | Self::Configuration { message, .. } => message,
            Self::ModelNotFound { model, .. } => model,
            Self::ContentFiltered { reason, .. } => reason,
        }
    }

    /// Text shown to the user for this failure.
    ///
    /// Falls back to [`UNKNOWN_ERROR_MESSAGE`] when the error carries no message.
    pub fn detail(&self) -> String {
        if self.message().trim().is_empty() {
            UNKNOWN_ERROR_MESSAGE.to_string()
        } else {
            self.to_string()
        }
    }

    /// Whether trying the same request again could succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::RateLimit { .. }
            | Self::Network { .. }
            | Self::Timeout { .. }
            | Self::ProviderUnavailable { .. } => true,
            Self::ApiError { status, .. } => *status >= 500,
            _ => false,
        }
    }
}
