//! Game session module - one round of guessing
//!
//! A session owns the secret, the attempt counter and the guesses made so far.
//! Every accepted guess is recorded before it is compared, so
//! `attempts() == guessed().len()` holds at all times.

use std::cmp::Ordering;
use std::num::IntErrorKind;

use arrayvec::ArrayVec;
use log::debug;

use crate::error::{GuessError, ValidationError};
use crate::rng::SimpleRng;
use crate::types::{GUESS_MAX, GUESS_MIN, GUESS_SPAN};

/// Result of an accepted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuessOutcome {
    /// The guess is below the secret
    TooLow,
    /// The guess is above the secret
    TooHigh,
    /// The guess matched; the round is over
    Won { attempts: u32 },
}

impl GuessOutcome {
    pub fn is_win(&self) -> bool {
        matches!(self, GuessOutcome::Won { .. })
    }
}

/// State of a single round
#[derive(Debug, Clone)]
pub struct GameSession {
    rng: SimpleRng,
    secret: u8,
    attempts: u32,
    /// Accepted guesses in submission order. Range and duplicate checks keep
    /// this within capacity.
    guessed: ArrayVec<u8, GUESS_SPAN>,
    is_over: bool,
    /// Monotonic round id (increments on reset).
    round: u32,
}

impl GameSession {
    /// Create a session whose secrets are drawn from `seed`
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let secret = draw_secret(&mut rng);
        debug!("round 1 started, secret {}", secret);

        Self {
            rng,
            secret,
            attempts: 0,
            guessed: ArrayVec::new(),
            is_over: false,
            round: 1,
        }
    }

    /// Create a session with a fixed secret
    ///
    /// Later resets draw from the default seed.
    pub fn with_secret(secret: u8) -> Result<Self, GuessError> {
        let mut session = Self::new(1);
        session.reset_with_secret(secret)?;
        session.round = 1;
        Ok(session)
    }

    /// Start a new round with a freshly drawn secret
    pub fn reset(&mut self) {
        let secret = draw_secret(&mut self.rng);
        self.begin_round(secret);
    }

    /// Start a new round with the given secret
    pub fn reset_with_secret(&mut self, secret: u8) -> Result<(), GuessError> {
        if !(GUESS_MIN..=GUESS_MAX).contains(&secret) {
            return Err(ValidationError::OutOfRange.into());
        }
        self.begin_round(secret);
        Ok(())
    }

    fn begin_round(&mut self, secret: u8) {
        self.secret = secret;
        self.attempts = 0;
        self.guessed.clear();
        self.is_over = false;
        self.round = self.round.wrapping_add(1);
        debug!("round {} started, secret {}", self.round, secret);
    }

    /// Submit raw text typed by the player
    ///
    /// Leading and trailing whitespace is ignored. Anything that is not an
    /// integer counts as [`ValidationError::Empty`].
    pub fn submit_guess(&mut self, raw: &str) -> Result<GuessOutcome, GuessError> {
        if self.is_over {
            return Err(GuessError::GameAlreadyOver);
        }
        let value = parse_guess(raw)?;
        self.submit_number(value)
    }

    /// Submit an already parsed number
    pub fn submit_number(&mut self, value: i64) -> Result<GuessOutcome, GuessError> {
        if self.is_over {
            return Err(GuessError::GameAlreadyOver);
        }
        if value < GUESS_MIN as i64 || value > GUESS_MAX as i64 {
            return Err(ValidationError::OutOfRange.into());
        }

        let value = value as u8;
        if self.guessed.contains(&value) {
            return Err(ValidationError::Duplicate.into());
        }

        // The guess is spent even if it loses.
        self.guessed.push(value);
        self.attempts += 1;

        let outcome = match value.cmp(&self.secret) {
            Ordering::Equal => {
                self.is_over = true;
                GuessOutcome::Won {
                    attempts: self.attempts,
                }
            }
            Ordering::Less => GuessOutcome::TooLow,
            Ordering::Greater => GuessOutcome::TooHigh,
        };
        debug!(
            "round {} guess #{}: {} -> {:?}",
            self.round, self.attempts, value, outcome
        );
        Ok(outcome)
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Accepted guesses in submission order
    pub fn guessed(&self) -> &[u8] {
        &self.guessed
    }

    pub fn has_guessed(&self, value: u8) -> bool {
        self.guessed.contains(&value)
    }

    pub fn is_over(&self) -> bool {
        self.is_over
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn secret(&self) -> u8 {
        self.secret
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(1)
    }
}

fn draw_secret(rng: &mut SimpleRng) -> u8 {
    rng.next_between(GUESS_MIN as u32, GUESS_MAX as u32) as u8
}

/// Parse player input into an integer
///
/// Integers too large for `i64` are out of range rather than empty, since the
/// player clearly typed a number.
pub fn parse_guess(raw: &str) -> Result<i64, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }
    trimmed.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ValidationError::OutOfRange,
        _ => ValidationError::Empty,
    })
}
