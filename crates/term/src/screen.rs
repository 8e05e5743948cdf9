//! Screen: the retained state behind the terminal view.
//!
//! The game controller talks to this through [`Presenter`]; the view reads it
//! back when drawing a frame.

use crate::core::{LeaderboardEntry, Presenter};
use crate::types::MessageKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    message: String,
    message_kind: MessageKind,
    history: Vec<u8>,
    attempts: u32,
    best: Option<u32>,
    leaderboard: Vec<LeaderboardEntry>,
    highlight: Option<usize>,
    input_enabled: bool,
    /// Host-level problem (e.g. a failed save), shown in place of the help line.
    notice: Option<String>,
}

impl Default for Screen {
    fn default() -> Self {
        Self {
            message: String::new(),
            message_kind: MessageKind::Neutral,
            history: Vec::new(),
            attempts: 0,
            best: None,
            leaderboard: Vec::new(),
            highlight: None,
            input_enabled: true,
            notice: None,
        }
    }
}

impl Screen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message(&self) -> (&str, MessageKind) {
        (&self.message, self.message_kind)
    }

    pub fn history(&self) -> &[u8] {
        &self.history
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn best(&self) -> Option<u32> {
        self.best
    }

    pub fn leaderboard(&self) -> &[LeaderboardEntry] {
        &self.leaderboard
    }

    pub fn highlight(&self) -> Option<usize> {
        self.highlight
    }

    pub fn input_enabled(&self) -> bool {
        self.input_enabled
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn set_notice(&mut self, notice: impl Into<String>) {
        self.notice = Some(notice.into());
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }
}

impl Presenter for Screen {
    fn show_message(&mut self, text: &str, kind: MessageKind) {
        self.message.clear();
        self.message.push_str(text);
        self.message_kind = kind;
    }

    fn append_guess_to_history(&mut self, value: u8) {
        self.history.push(value);
    }

    fn clear_history(&mut self) {
        self.history.clear();
    }

    fn set_attempts_display(&mut self, attempts: u32) {
        self.attempts = attempts;
    }

    fn set_best_score_display(&mut self, best: Option<u32>) {
        self.best = best;
    }

    fn render_leaderboard(&mut self, entries: &[LeaderboardEntry], highlight: Option<usize>) {
        self.leaderboard = entries.to_vec();
        self.highlight = highlight;
    }

    fn set_input_enabled(&mut self, enabled: bool) {
        self.input_enabled = enabled;
    }
}
