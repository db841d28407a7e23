//! Gemini Configuration Module

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use super::error::gemini_config_error;
use crate::core::providers::ProviderError;

/// Default image-capable model
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-image-preview";

/// Google AI Studio endpoint
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_api_version() -> String {
    "v1beta".to_string()
}

fn default_request_timeout() -> u64 {
    120
}

fn default_connect_timeout() -> u64 {
    10
}

/// Gemini client configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// API key (Google AI Studio)
    #[serde(default)]
    pub api_key: String,

    /// Image generation model
    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Upper bound for one generation call, in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,

    /// Connection timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,

    #[serde(default)]
    pub proxy_url: Option<String>,

    /// Log request and response bodies at debug level
    #[serde(default)]
    pub debug: bool,
}

impl GeminiConfig {
    /// Create a Google AI Studio configuration
    pub fn new_google_ai(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: default_model(),
            base_url: default_base_url(),
            api_version: default_api_version(),
            request_timeout: default_request_timeout(),
            connect_timeout: default_connect_timeout(),
            proxy_url: None,
            debug: false,
        }
    }

    /// Create from `GEMINI_API_KEY` (or `GOOGLE_API_KEY`), `GEMINI_MODEL` and `GEMINI_BASE_URL`
    pub fn from_env() -> Result<Self, ProviderError> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("GOOGLE_API_KEY"))
            .map_err(|_| {
                gemini_config_error("No Gemini API key found in GEMINI_API_KEY or GOOGLE_API_KEY")
            })?;

        let mut config = Self::new_google_ai(api_key);
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Apply optional model, base URL and timeout overrides from the environment
    pub fn apply_env_overrides(&mut self) -> Result<(), ProviderError> {
        if let Ok(model) = std::env::var("GEMINI_MODEL") {
            self.model = model;
        }
        if let Ok(base_url) = std::env::var("GEMINI_BASE_URL") {
            self.base_url = base_url;
        }
        if let Ok(timeout) = std::env::var("GEMINI_TIMEOUT") {
            self.request_timeout = timeout
                .parse()
                .map_err(|e| gemini_config_error(format!("Invalid GEMINI_TIMEOUT: {}", e)))?;
        }
        Ok(())
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.request_timeout = timeout_secs;
        self
    }

    pub fn with_proxy(mut self, proxy_url: impl Into<String>) -> Self {
        self.proxy_url = Some(proxy_url.into());
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// `generateContent` endpoint for the configured model
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.api_version,
            self.model
        )
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.api_key.trim().is_empty() {
            return Err("API key is required for Google AI Studio".to_string());
        }

        if self.model.trim().is_empty() {
            return Err("Model name cannot be empty".to_string());
        }

        let url = Url::parse(&self.base_url)
            .map_err(|e| format!("Invalid base URL '{}': {}", self.base_url, e))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(format!(
                "Base URL must use http:// or https:// scheme, got: {}",
                url.scheme()
            ));
        }

        if self.request_timeout == 0 {
            return Err("Request timeout must be greater than 0".to_string());
        }

        if self.connect_timeout == 0 {
            return Err("Connect timeout must be greater than 0".to_string());
        }

        if self.connect_timeout > self.request_timeout {
            return Err("Connect timeout cannot be greater than request timeout".to_string());
        }

        Ok(())
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self::new_google_ai("")
    }
}

impl fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let api_key = if self.api_key.is_empty() {
            ""
        } else {
            "[REDACTED]"
        };
        f.debug_struct("GeminiConfig")
            .field("api_key", &api_key)
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .field("request_timeout", &self.request_timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("proxy_url", &self.proxy_url)
            .field("debug", &self.debug)
            .finish()
    }
}
