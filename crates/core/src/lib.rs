//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules of the guessing game and the bookkeeping of
//! its records. It has **no dependencies** on the terminal or the filesystem:
//! persistence goes through the [`Storage`] trait and everything visible goes
//! through [`Presenter`] and [`Celebration`].
//!
//! - **Deterministic**: the same seed draws the same secrets
//! - **Testable**: secrets can be fixed and storage swapped for memory
//! - **Portable**: terminal, GUI or headless hosts share the same logic
//!
//! # Module Structure
//!
//! - [`session`]: one round (secret, attempts, guessed values, over flag)
//! - [`leaderboard`]: bounded ranking persisted as a JSON snapshot
//! - [`best_score`]: fewest attempts ever, persisted as a plain integer
//! - [`game`]: controller driving the collaborators from player input
//! - [`present`]: rendering and celebration seams
//! - [`storage`]: key-value storage seam and an in-memory implementation
//! - [`rng`]: small LCG used for secrets and cosmetic effects
//!
//! # Game Rules
//!
//! - The secret is uniformly random in `1..=100` and fixed for the round
//! - Empty, out-of-range and repeated guesses are rejected without cost
//! - Every accepted guess costs one attempt; the round ends on a match
//! - Fewer attempts is better, both for the best score and the leaderboard
//!
//! # Example
//!
//! ```
//! use tui_guess_core::{GameSession, GuessOutcome};
//!
//! let mut session = GameSession::with_secret(42).unwrap();
//!
//! assert_eq!(session.submit_guess("10"), Ok(GuessOutcome::TooLow));
//! assert_eq!(session.submit_guess("90"), Ok(GuessOutcome::TooHigh));
//! assert_eq!(session.submit_guess("42"), Ok(GuessOutcome::Won { attempts: 3 }));
//! assert!(session.is_over());
//! ```

pub mod best_score;
pub mod error;
pub mod game;
pub mod leaderboard;
pub mod present;
pub mod rng;
pub mod session;
pub mod storage;

pub use tui_guess_types as types;

// Re-export commonly used types for convenience
pub use best_score::BestScore;
pub use error::{GuessError, PersistenceError, StorageError, ValidationError};
pub use game::{rejection_message, Game, GuessReport};
pub use leaderboard::{sanitize_name, Leaderboard, LeaderboardEntry};
pub use present::{Celebration, NoCelebration, Presenter};
pub use rng::SimpleRng;
pub use session::{parse_guess, GameSession, GuessOutcome};
pub use storage::{MemoryStorage, Storage};
