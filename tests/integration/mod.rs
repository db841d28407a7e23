//! Integration tests for interior-studio
//!
//! These tests verify the interaction between the session, the generation
//! client and the configuration layer.

pub mod config_tests;
pub mod session_tests;
