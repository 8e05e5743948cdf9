//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Guess Range
//!
//! The secret and every accepted guess lie in `GUESS_MIN..=GUESS_MAX` (1..=100).
//!
//! # Persistence Keys
//!
//! | Key | Value |
//! |-----|-------|
//! | `bestScore` | Decimal string of the fewest attempts ever needed |
//! | `leaderboard` | JSON array of `{name, score, date}` entries, ascending by score |
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `CONFETTI_DURATION_MS` | 5000 | Celebration auto-stop |
//!
//! # Examples
//!
//! ```
//! use tui_guess_types::{InputMode, MessageKind, GUESS_MAX, GUESS_MIN};
//!
//! assert_eq!(GUESS_MIN, 1);
//! assert_eq!(GUESS_MAX, 100);
//!
//! assert_eq!(MessageKind::default(), MessageKind::Neutral);
//! assert_eq!(InputMode::default(), InputMode::Guess);
//! ```

/// Smallest valid guess (and smallest possible secret)
pub const GUESS_MIN: u8 = 1;

/// Largest valid guess (and largest possible secret)
pub const GUESS_MAX: u8 = 100;

/// Number of distinct values a player can guess
pub const GUESS_SPAN: usize = (GUESS_MAX - GUESS_MIN + 1) as usize;

/// Maximum number of leaderboard entries kept after each insertion
pub const LEADERBOARD_MAX: usize = 10;

/// Storage key holding the best (lowest) attempt count
pub const BEST_SCORE_KEY: &str = "bestScore";

/// Storage key holding the serialized leaderboard
pub const LEADERBOARD_KEY: &str = "leaderboard";

/// Name recorded when the player leaves the name prompt blank
pub const ANONYMOUS_NAME: &str = "Anonymous";

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// How long the celebration runs before stopping by itself
pub const CONFETTI_DURATION_MS: u32 = 5000;

/// Below this many live particles the celebration spawns another batch
pub const CONFETTI_MIN_PARTICLES: usize = 50;

/// Characters accepted in the guess input line ("100" is the longest valid guess)
pub const GUESS_INPUT_MAX: usize = 3;

/// Characters accepted in the leaderboard name prompt
pub const NAME_INPUT_MAX: usize = 16;

/// Tone of a feedback message
///
/// - **Neutral**: informational (new round, prompts)
/// - **Correct**: the winning guess
/// - **Incorrect**: too low/high, or rejected input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MessageKind {
    #[default]
    Neutral,
    Correct,
    Incorrect,
}

/// Which line the keyboard is currently editing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputMode {
    /// Typing a guess
    #[default]
    Guess,
    /// Typing a name for a qualifying leaderboard score
    Name,
}

/// Actions produced by the keyboard and consumed by the game loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Append a character to the active input line
    Char(char),
    /// Delete the last character of the active input line
    Backspace,
    /// Submit the active input line (guess or name)
    Submit,
    /// Discard the current round and draw a new secret
    NewGame,
    /// Show or hide the leaderboard panel
    ToggleLeaderboard,
    /// Leave the name prompt without recording a score
    Cancel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guess_range_defaults() {
        assert_eq!(GUESS_MIN, 1);
        assert_eq!(GUESS_MAX, 100);
        assert_eq!(GUESS_SPAN, 100);
        assert_eq!(LEADERBOARD_MAX, 10);
        assert_eq!(GUESS_MAX.to_string().len(), GUESS_INPUT_MAX);
    }

    #[test]
    fn persistence_keys_match_stored_layout() {
        assert_eq!(BEST_SCORE_KEY, "bestScore");
        assert_eq!(LEADERBOARD_KEY, "leaderboard");
    }

    #[test]
    fn fresh_screen_defaults() {
        assert_eq!(MessageKind::default(), MessageKind::Neutral);
        assert_eq!(InputMode::default(), InputMode::Guess);
    }
}
