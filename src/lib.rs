//! TUI Rock-Paper-Scissors (workspace facade crate).
//!
//! Re-exports the `tui_rps::{core,input,term,types}` API from the crates
//! under `crates/`, and hosts what the binary builds on top of them:
//! configuration, logging setup, and the game session.

pub mod config;
pub mod logging;
pub mod session;

pub use tui_rps_core as core;
pub use tui_rps_input as input;
pub use tui_rps_term as term;
pub use tui_rps_types as types;

pub use config::AppConfig;
pub use session::Session;
