//! Utility modules for the studio
//!
//! - **error**: Crate error type and result alias
//! - **logging**: Tracing subscriber setup

pub mod error;
pub mod logging;

pub use error::{Result, StudioError};
pub use logging::init_tracing;
