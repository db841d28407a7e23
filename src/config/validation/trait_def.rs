//! Validation trait definition

/// Validation trait for configuration sections
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
