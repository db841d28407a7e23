//! Google Gemini Provider
//!
//! Generates room redesigns with Gemini's image-capable models through the
//! Google AI Studio `generateContent` endpoint.
//!
//! - `client`: HTTP transport and the [`DesignGenerator`](super::DesignGenerator) impl
//! - `config`: endpoint, model, credentials and timeouts
//! - `error`: status and error-envelope mapping
//! - `prompt`: design prompt wording
//! - `transform`: request body and response parsing

pub mod client;
pub mod config;
pub mod error;
pub mod prompt;
pub mod transform;

pub use client::GeminiClient;
pub use config::GeminiConfig;
pub use error::GeminiErrorMapper;
