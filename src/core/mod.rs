//! Core functionality for the studio
//!
//! This module contains the option catalogs, the data model, the generation
//! client and the session state machine.

pub mod catalog;
pub mod providers;
pub mod session;
pub mod types;
