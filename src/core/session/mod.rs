//! Studio session
//!
//! - `state`: the explicit session state machine
//! - `history`: bounded gallery of past result sets
//! - `studio`: async driver tying a session to a [`DesignGenerator`](crate::core::providers::DesignGenerator)

pub mod history;
pub mod state;
pub mod studio;

pub use history::{DEFAULT_HISTORY_CAPACITY, DesignHistory, ResultSet};
pub use state::{MIN_DESIGN_VARIATIONS, SessionState, View};
pub use studio::Studio;
