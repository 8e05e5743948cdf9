//! Terminal input module.
//!
//! This module is intentionally independent of any UI framework beyond
//! `crossterm` events. It maps key events into [`crate::types::GameAction`]
//! according to the active [`crate::types::InputMode`] and provides the bounded
//! line buffers the player types into.

pub mod line;
pub mod map;

pub use tui_guess_types as types;

pub use line::{GuessLine, LineEditor, NameLine};
pub use map::{handle_key_event, should_quit};
