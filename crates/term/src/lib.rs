//! Terminal rendering for the guessing game.
//!
//! Rendering goes through a plain framebuffer instead of a widget toolkit:
//! [`GameView`] turns a [`ViewModel`] into a [`FrameBuffer`], and
//! [`TerminalRenderer`] flushes only the cells that changed.
//!
//! [`Screen`] is the terminal's [`Presenter`](crate::core::Presenter) and
//! [`Confetti`] its [`Celebration`](crate::core::Celebration).

pub mod confetti;
pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod screen;

pub use tui_guess_core as core;
pub use tui_guess_types as types;

pub use confetti::{Confetti, Particle, Shape, PALETTE};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, ViewModel, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use screen::Screen;
