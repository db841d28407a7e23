//! Configuration data models
//!
//! This module defines the configuration sections owned by the studio itself.
//! The Gemini section is [`GeminiConfig`](crate::core::providers::gemini::GeminiConfig).

pub mod logging;
pub mod studio;

pub use logging::*;
pub use studio::*;

/// Default number of result sets kept in the gallery
pub fn default_history_capacity() -> usize {
    crate::core::session::DEFAULT_HISTORY_CAPACITY
}

/// Default log level
pub fn default_log_level() -> String {
    "info".to_string()
}
