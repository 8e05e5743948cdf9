//! Terminal number-guessing game (workspace facade crate).
//!
//! The game itself lives in dedicated crates under `crates/`; this package
//! re-exports them as `tui_guess::{core,input,store,term,types}` and adds the
//! terminal application state and configuration used by the binary.

pub use tui_guess_core as core;
pub use tui_guess_input as input;
pub use tui_guess_store as store;
pub use tui_guess_term as term;
pub use tui_guess_types as types;

pub mod app;
pub mod config;

pub use app::App;
pub use config::AppConfig;
