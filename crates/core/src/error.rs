//! Error types for the game core.
//!
//! None of these are fatal: validation problems are shown to the player and
//! persistence problems are reported to the caller without retrying.

use thiserror::Error;

/// Why a submitted guess was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ValidationError {
    /// Nothing (or something that is not an integer) was entered.
    #[error("no number was entered")]
    Empty,
    /// The number lies outside `1..=100`.
    #[error("the number is outside the allowed range")]
    OutOfRange,
    /// The number was already guessed this round.
    #[error("the number was already guessed")]
    Duplicate,
}

/// Error returned by [`crate::GameSession::submit_guess`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum GuessError {
    #[error("invalid guess: {0}")]
    Invalid(#[from] ValidationError),
    #[error("the round is already won")]
    GameAlreadyOver,
}

impl GuessError {
    /// The validation reason, if this is an input problem.
    pub fn reason(&self) -> Option<ValidationError> {
        match self {
            GuessError::Invalid(reason) => Some(*reason),
            GuessError::GameAlreadyOver => None,
        }
    }
}

/// A storage backend refused or failed a write.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("could not write key `{key}`: {reason}")]
    Write { key: String, reason: String },
    #[error("storage I/O failed")]
    Io(#[from] std::io::Error),
}

/// Persisting the best score or leaderboard failed.
///
/// The in-memory value stays as computed; the next successful write stores a
/// full snapshot again.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to store `{key}`")]
    Storage {
        key: &'static str,
        #[source]
        source: StorageError,
    },
    #[error("failed to encode `{key}`")]
    Encode {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl PersistenceError {
    /// Storage key whose write failed.
    pub fn key(&self) -> &'static str {
        match self {
            PersistenceError::Storage { key, .. } | PersistenceError::Encode { key, .. } => key,
        }
    }
}
