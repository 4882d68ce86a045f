//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal play. It avoids widget toolkits and
//! instead renders into a simple framebuffer that is flushed to a terminal
//! backend.
//!
//! Goals:
//! - Keep `core` free of any presentation concern
//! - Keep the view pure so layouts can be asserted in tests
//! - Own the on-screen round history, which the engine never sees

pub mod fb;
pub mod game_view;
pub mod history;
pub mod renderer;

pub use tui_rps_core as core;
pub use tui_rps_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{outcome_color, AnchorY, GameView, TableSnapshot, Viewport};
pub use history::{RoundHistory, RoundRecord};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
