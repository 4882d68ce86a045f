//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Rounds are
//! discrete, so there is no repeat handling: one key press, one action.

pub mod map;

pub use tui_rps_types as types;

pub use map::{handle_key_event, should_quit};
