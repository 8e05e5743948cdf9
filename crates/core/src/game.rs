//! Game controller - wires a session, the best score and the leaderboard to
//! the presentation collaborators.
//!
//! The controller decides *what* the player sees after each action; the
//! [`Presenter`] decides *how*. No method here waits on time: follow-ups such
//! as the name prompt are sequenced by the caller using the returned report.

use chrono::NaiveDate;
use log::{error, info};

use crate::best_score::BestScore;
use crate::error::{GuessError, PersistenceError, ValidationError};
use crate::leaderboard::{Leaderboard, LeaderboardEntry};
use crate::present::{Celebration, Presenter};
use crate::session::{parse_guess, GameSession, GuessOutcome};
use crate::storage::Storage;
use crate::types::{MessageKind, GUESS_MAX, GUESS_MIN};

/// What happened on an accepted guess
#[derive(Debug)]
pub struct GuessReport {
    pub outcome: GuessOutcome,
    /// Round the guess belongs to.
    pub round: u32,
    /// The win set a new best score.
    pub new_best: bool,
    /// The win is good enough for the leaderboard.
    pub qualifies: bool,
    /// Set when the improved best score could not be stored.
    pub best_score_error: Option<PersistenceError>,
}

/// Complete game: current round plus persisted records
pub struct Game<S: Storage> {
    session: GameSession,
    leaderboard: Leaderboard,
    best: BestScore,
    store: S,
}

impl<S: Storage> Game<S> {
    /// Create a game over `store`, drawing secrets from `seed`
    pub fn new(store: S, seed: u32) -> Self {
        Self::with_parts(store, GameSession::new(seed), Leaderboard::default())
    }

    /// Create a game from explicit parts (fixed secrets, smaller boards)
    pub fn with_parts(store: S, session: GameSession, leaderboard: Leaderboard) -> Self {
        let best = BestScore::load(&store);
        Self {
            session,
            leaderboard,
            best,
            store,
        }
    }

    /// Discard the current round and start a new one
    pub fn new_game(&mut self, presenter: &mut dyn Presenter) {
        self.session.reset();
        info!("new round {}", self.session.round());
        self.present_round(presenter);
    }

    /// Push the whole current round to the presenter
    pub fn present_round(&self, presenter: &mut dyn Presenter) {
        presenter.show_message("", MessageKind::Neutral);
        presenter.clear_history();
        for &value in self.session.guessed() {
            presenter.append_guess_to_history(value);
        }
        presenter.set_attempts_display(self.session.attempts());
        presenter.set_best_score_display(self.best.value());
        presenter.set_input_enabled(!self.session.is_over());
        self.show_leaderboard(presenter);
    }

    /// Submit raw player input for the current round
    pub fn submit(
        &mut self,
        raw: &str,
        presenter: &mut dyn Presenter,
        celebration: &mut dyn Celebration,
    ) -> Result<GuessReport, GuessError> {
        let outcome = match self.session.submit_guess(raw) {
            Ok(outcome) => outcome,
            Err(err) => {
                let (text, kind) = rejection_message(&err, raw);
                presenter.show_message(&text, kind);
                return Err(err);
            }
        };

        let attempts = self.session.attempts();
        if let Some(&value) = self.session.guessed().last() {
            presenter.append_guess_to_history(value);
        }
        presenter.set_attempts_display(attempts);

        let mut report = GuessReport {
            outcome,
            round: self.session.round(),
            new_best: false,
            qualifies: false,
            best_score_error: None,
        };

        match outcome {
            GuessOutcome::Won { attempts } => {
                presenter.show_message(
                    &format!(
                        "Congratulations! You guessed the number {} in {} attempts!",
                        self.session.secret(),
                        attempts
                    ),
                    MessageKind::Correct,
                );
                presenter.set_input_enabled(false);

                match self.best.offer(&mut self.store, attempts) {
                    Ok(improved) => report.new_best = improved,
                    Err(e) => {
                        error!("could not store best score {}: {}", attempts, e);
                        report.new_best = true;
                        report.best_score_error = Some(e);
                    }
                }
                presenter.set_best_score_display(self.best.value());

                report.qualifies = self.is_qualifying(attempts);
                info!(
                    "round {} won in {} attempts (new best: {}, qualifies: {})",
                    report.round, attempts, report.new_best, report.qualifies
                );
                celebration.celebrate();
            }
            GuessOutcome::TooLow => {
                presenter.show_message("Too low! Try a higher number.", MessageKind::Incorrect);
            }
            GuessOutcome::TooHigh => {
                presenter.show_message("Too high! Try a lower number.", MessageKind::Incorrect);
            }
        }

        Ok(report)
    }

    /// Whether `score` would currently enter the leaderboard
    pub fn is_qualifying(&self, score: u32) -> bool {
        self.leaderboard.is_qualifying(&self.store, score)
    }

    /// Record a score and show the new ranking with it highlighted
    ///
    /// If storing fails the unpersisted ranking stays on screen and the error
    /// is returned.
    pub fn record_score(
        &mut self,
        name: &str,
        score: u32,
        date: NaiveDate,
        presenter: &mut dyn Presenter,
    ) -> Result<Option<usize>, PersistenceError> {
        let entry = LeaderboardEntry::new(name, score, date);
        let (entries, position) = self
            .leaderboard
            .insert(self.leaderboard.all(&self.store), entry);
        presenter.render_leaderboard(&entries, position);

        if let Err(e) = self.leaderboard.save(&mut self.store, &entries) {
            error!("could not store leaderboard: {}", e);
            return Err(e);
        }
        info!("leaderboard entry for score {} at {:?}", score, position);
        Ok(position)
    }

    /// Show the stored ranking without highlight
    pub fn show_leaderboard(&self, presenter: &mut dyn Presenter) {
        presenter.render_leaderboard(&self.leaderboard.all(&self.store), None);
    }

    pub fn leaderboard_entries(&self) -> Vec<LeaderboardEntry> {
        self.leaderboard.all(&self.store)
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut GameSession {
        &mut self.session
    }

    pub fn best_score(&self) -> Option<u32> {
        self.best.value()
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}

/// Feedback text for a rejected guess
pub fn rejection_message(err: &GuessError, raw: &str) -> (String, MessageKind) {
    match err {
        GuessError::GameAlreadyOver => (
            "The game is over. Press N to start a new round.".to_string(),
            MessageKind::Neutral,
        ),
        GuessError::Invalid(ValidationError::Empty) => {
            ("Please enter a number.".to_string(), MessageKind::Incorrect)
        }
        GuessError::Invalid(ValidationError::OutOfRange) => (
            format!(
                "Please enter a number between {} and {}.",
                GUESS_MIN, GUESS_MAX
            ),
            MessageKind::Incorrect,
        ),
        GuessError::Invalid(ValidationError::Duplicate) => {
            let text = match parse_guess(raw) {
                Ok(value) => format!("You already guessed {}. Try a different number.", value),
                Err(_) => "You already guessed that. Try a different number.".to_string(),
            };
            (text, MessageKind::Incorrect)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_messages_name_the_problem() {
        assert_eq!(
            rejection_message(&ValidationError::OutOfRange.into(), "0").0,
            "Please enter a number between 1 and 100."
        );
        assert_eq!(
            rejection_message(&ValidationError::Duplicate.into(), " 42 ").0,
            "You already guessed 42. Try a different number."
        );
        let (_, kind) = rejection_message(&GuessError::GameAlreadyOver, "");
        assert_eq!(kind, MessageKind::Neutral);
    }
}
