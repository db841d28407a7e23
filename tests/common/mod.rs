//! Common test utilities for interior-studio
//!
//! This module provides shared test infrastructure for all tests:
//! - Image, request and response fixtures
//! - Scripted design generators
//!
//! # Usage
//!
//! ```rust
//! use crate::common::{fixtures, providers};
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let generator = providers::ScriptedGenerator::succeeding(2);
//!     let room = fixtures::room_image();
//!     // ...
//! }
//! ```

pub mod fixtures;

// Re-export commonly used items
pub use fixtures::{designs, moodboard_image, room_image};
pub use providers::ScriptedGenerator;

/// Skip test if environment variable is not set
#[macro_export]
macro_rules! skip_without_env {
    ($var:expr) => {
        if std::env::var($var).is_err() {
            eprintln!("Skipping test: {} environment variable not set", $var);
            return;
        }
    };
}

/// Assert that a result is Ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}

/// Assert that a result is Err
#[macro_export]
macro_rules! assert_err {
    ($expr:expr) => {
        match $expr {
            Ok(v) => panic!("Expected Err, got Ok: {:?}", v),
            Err(e) => e,
        }
    };
}
