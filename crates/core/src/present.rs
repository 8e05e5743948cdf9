//! Collaborator seams between the game logic and whatever shows it.
//!
//! The controller in [`crate::game`] pushes every visible change through
//! [`Presenter`], so the same logic drives the terminal screen or a recording
//! double in tests.

use crate::leaderboard::LeaderboardEntry;
use crate::types::MessageKind;

/// Rendering collaborator
pub trait Presenter {
    fn show_message(&mut self, text: &str, kind: MessageKind);

    fn append_guess_to_history(&mut self, value: u8);

    fn clear_history(&mut self);

    fn set_attempts_display(&mut self, attempts: u32);

    /// `None` renders as `-`.
    fn set_best_score_display(&mut self, best: Option<u32>);

    /// Replace the shown ranking; `highlight` marks a just-recorded row.
    fn render_leaderboard(&mut self, entries: &[LeaderboardEntry], highlight: Option<usize>);

    fn set_input_enabled(&mut self, enabled: bool);
}

/// Cosmetic effect fired on a win. Nothing is returned to the caller.
pub trait Celebration {
    fn celebrate(&mut self);
}

/// Celebration that does nothing (effects disabled).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCelebration;

impl Celebration for NoCelebration {
    fn celebrate(&mut self) {}
}

impl<C: Celebration + ?Sized> Celebration for &mut C {
    fn celebrate(&mut self) {
        (**self).celebrate()
    }
}
