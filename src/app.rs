//! Terminal application state: one [`Game`] plus everything only the terminal
//! needs (line buffers, input mode, leaderboard toggle, confetti).
//!
//! [`App::handle`] takes already-mapped [`GameAction`]s, so the whole flow can
//! be driven without a terminal.

use chrono::NaiveDate;
use log::{debug, warn};

use crate::core::{Celebration, Game, GuessOutcome, NoCelebration, Storage};
use crate::input::{GuessLine, NameLine};
use crate::term::{Confetti, FrameBuffer, GameView, Screen, ViewModel, Viewport};
use crate::types::{GameAction, InputMode};

pub struct App<S: Storage> {
    game: Game<S>,
    screen: Screen,
    confetti: Confetti,
    confetti_enabled: bool,
    guess: GuessLine,
    name: NameLine,
    mode: InputMode,
    show_leaderboard: bool,
    /// Winning attempt count waiting for a leaderboard name.
    pending_score: Option<u32>,
}

impl<S: Storage> App<S> {
    pub fn new(game: Game<S>, confetti: Confetti, confetti_enabled: bool) -> Self {
        let mut screen = Screen::new();
        game.present_round(&mut screen);
        Self {
            game,
            screen,
            confetti,
            confetti_enabled,
            guess: GuessLine::new(),
            name: NameLine::new(),
            mode: InputMode::Guess,
            show_leaderboard: false,
            pending_score: None,
        }
    }

    /// Apply one player action; `today` dates a leaderboard entry.
    pub fn handle(&mut self, action: GameAction, today: NaiveDate) {
        match self.mode {
            InputMode::Guess => self.handle_guess(action),
            InputMode::Name => self.handle_name(action, today),
        }
    }

    fn handle_guess(&mut self, action: GameAction) {
        match action {
            GameAction::Char(ch) => {
                if self.screen.input_enabled() && ch.is_ascii_digit() {
                    self.guess.push(ch);
                }
            }
            GameAction::Backspace => {
                self.guess.pop();
            }
            GameAction::Submit => self.submit_guess(),
            GameAction::NewGame => {
                self.game.new_game(&mut self.screen);
                self.guess.clear();
                self.confetti.stop();
                self.screen.clear_notice();
            }
            GameAction::ToggleLeaderboard => {
                self.show_leaderboard = !self.show_leaderboard;
                if self.show_leaderboard {
                    self.game.show_leaderboard(&mut self.screen);
                }
            }
            GameAction::Cancel => {}
        }
    }

    fn submit_guess(&mut self) {
        let raw = self.guess.take();
        let mut none = NoCelebration;
        let celebration: &mut dyn Celebration = if self.confetti_enabled {
            &mut self.confetti
        } else {
            &mut none
        };

        let report = match self.game.submit(&raw, &mut self.screen, celebration) {
            Ok(report) => report,
            Err(e) => {
                debug!("guess {:?} rejected: {}", raw, e);
                return;
            }
        };

        if let Some(e) = &report.best_score_error {
            self.screen
                .set_notice(format!("Best score not saved: {}", e));
        }
        if let GuessOutcome::Won { attempts } = report.outcome {
            if report.qualifies {
                self.pending_score = Some(attempts);
                self.name.clear();
                self.mode = InputMode::Name;
            }
        }
    }

    fn handle_name(&mut self, action: GameAction, today: NaiveDate) {
        match action {
            GameAction::Char(ch) => {
                if !ch.is_control() {
                    self.name.push(ch);
                }
            }
            GameAction::Backspace => {
                self.name.pop();
            }
            GameAction::Submit => {
                let name = self.name.take();
                if let Some(score) = self.pending_score.take() {
                    match self.game.record_score(&name, score, today, &mut self.screen) {
                        Ok(position) => debug!("score {} placed at {:?}", score, position),
                        Err(e) => {
                            warn!("leaderboard not saved: {}", e);
                            self.screen
                                .set_notice(format!("Leaderboard not saved: {}", e));
                        }
                    }
                    self.show_leaderboard = true;
                }
                self.mode = InputMode::Guess;
            }
            GameAction::Cancel => {
                self.name.clear();
                self.pending_score = None;
                self.mode = InputMode::Guess;
            }
            GameAction::NewGame | GameAction::ToggleLeaderboard => {}
        }
    }

    /// Advance time-based effects.
    pub fn tick(&mut self, dt_ms: u32) {
        self.confetti.tick(dt_ms);
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.confetti.set_viewport(viewport);
    }

    pub fn render_into(&self, view: &GameView, viewport: Viewport, fb: &mut FrameBuffer) {
        let guess = self.guess.as_string();
        let name = self.name.as_string();
        let model = ViewModel {
            screen: &self.screen,
            guess_input: &guess,
            name_input: &name,
            mode: self.mode,
            show_leaderboard: self.show_leaderboard,
            confetti: self.confetti_enabled.then_some(&self.confetti),
        };
        view.render_into(&model, viewport, fb);
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn game(&self) -> &Game<S> {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut Game<S> {
        &mut self.game
    }

    pub fn confetti(&self) -> &Confetti {
        &self.confetti
    }

    pub fn guess_input(&self) -> String {
        self.guess.as_string()
    }

    pub fn name_input(&self) -> String {
        self.name.as_string()
    }

    pub fn is_leaderboard_shown(&self) -> bool {
        self.show_leaderboard
    }

    pub fn pending_score(&self) -> Option<u32> {
        self.pending_score
    }
}
