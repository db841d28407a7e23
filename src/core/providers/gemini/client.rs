//! Gemini Client
//!
//! One `generateContent` call per generation, bounded by the configured timeout.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, ClientBuilder, Response};
use serde_json::Value;
use tokio::time::timeout;
use tracing::{debug, info};

use super::config::GeminiConfig;
use super::error::{
    GeminiErrorMapper, PROVIDER, gemini_config_error, gemini_network_error, gemini_parse_error,
};
use super::transform::{build_request_body, parse_designs};
use crate::core::providers::{DesignGenerator, GenerationRequest, ProviderError};
use crate::core::types::DesignVariation;

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini API client
#[derive(Debug, Clone)]
pub struct GeminiClient {
    config: GeminiConfig,
    http_client: Client,
}

impl GeminiClient {
    /// Create
    pub fn new(config: GeminiConfig) -> Result<Self, ProviderError> {
        config.validate().map_err(gemini_config_error)?;

        let mut builder = ClientBuilder::new()
            .timeout(config.timeout())
            .connect_timeout(Duration::from_secs(config.connect_timeout));

        if let Some(proxy_url) = &config.proxy_url {
            let proxy = reqwest::Proxy::all(proxy_url)
                .map_err(|e| gemini_config_error(format!("Invalid proxy URL: {}", e)))?;
            builder = builder.proxy(proxy);
        }

        let http_client = builder
            .build()
            .map_err(|e| gemini_config_error(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    async fn send_request(&self, body: Value) -> Result<Value, ProviderError> {
        let url = self.config.endpoint();
        let headers = self.build_headers()?;

        if self.config.debug {
            debug!("Gemini request URL: {}", url);
            debug!("Gemini request body: {}", redact_inline_data(&body));
        }

        let response = timeout(
            self.config.timeout(),
            self.http_client.post(&url).headers(headers).json(&body).send(),
        )
        .await
        .map_err(|_| {
            ProviderError::timeout(
                PROVIDER,
                format!("No response after {} seconds", self.config.request_timeout),
            )
        })?
        .map_err(|e| {
            if e.is_timeout() {
                ProviderError::timeout(PROVIDER, e.to_string())
            } else {
                gemini_network_error(format!("Network error: {}", e))
            }
        })?;

        self.handle_response(response).await
    }

    fn build_headers(&self) -> Result<HeaderMap, ProviderError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut api_key = HeaderValue::from_str(&self.config.api_key)
            .map_err(|e| gemini_config_error(format!("Invalid API key format: {}", e)))?;
        api_key.set_sensitive(true);
        headers.insert(HeaderName::from_static(API_KEY_HEADER), api_key);

        Ok(headers)
    }

    async fn handle_response(&self, response: Response) -> Result<Value, ProviderError> {
        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| gemini_network_error(format!("Failed to read response: {}", e)))?;

        if self.config.debug {
            debug!("Gemini response status: {}", status);
            debug!("Gemini response size: {} bytes", response_text.len());
        }

        if !status.is_success() {
            return Err(GeminiErrorMapper::from_http_status(
                status.as_u16(),
                &response_text,
            ));
        }

        let json_response: Value = serde_json::from_str(&response_text)
            .map_err(|e| gemini_parse_error(format!("Failed to parse response JSON: {}", e)))?;

        if json_response.get("error").is_some() {
            return Err(GeminiErrorMapper::from_api_response(&json_response));
        }

        Ok(json_response)
    }
}

#[async_trait]
impl DesignGenerator for GeminiClient {
    async fn generate_designs(
        &self,
        request: GenerationRequest,
    ) -> Result<Vec<DesignVariation>, ProviderError> {
        let body = build_request_body(&request);
        let response = self.send_request(body).await?;
        let designs = parse_designs(response)?;

        info!(
            model = %self.config.model,
            designs = designs.len(),
            "Gemini returned design variations"
        );
        Ok(designs)
    }

    fn name(&self) -> &'static str {
        PROVIDER
    }
}

/// Copy of a request body with inline image payloads replaced by their length
fn redact_inline_data(body: &Value) -> Value {
    match body {
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, value)| {
                    let value = match (key.as_str(), value) {
                        ("data", Value::String(data)) => {
                            Value::String(format!("<{} base64 chars>", data.len()))
                        }
                        _ => redact_inline_data(value),
                    };
                    (key.clone(), value)
                })
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.iter().map(redact_inline_data).collect()),
        other => other.clone(),
    }
}
