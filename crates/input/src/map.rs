//! Key mapping from terminal events to game actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::{GameAction, InputMode};

/// Map keyboard input to game actions for the given input mode.
pub fn handle_key_event(key: KeyEvent, mode: InputMode) -> Option<GameAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match mode {
        InputMode::Guess => match key.code {
            KeyCode::Char(ch) if ch.is_ascii_digit() => Some(GameAction::Char(ch)),
            KeyCode::Enter => Some(GameAction::Submit),
            KeyCode::Backspace => Some(GameAction::Backspace),

            // Round control
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::F(2) => Some(GameAction::NewGame),
            KeyCode::Tab | KeyCode::Char('l') | KeyCode::Char('L') => {
                Some(GameAction::ToggleLeaderboard)
            }

            _ => None,
        },
        InputMode::Name => match key.code {
            KeyCode::Char(ch) if !ch.is_control() => Some(GameAction::Char(ch)),
            KeyCode::Enter => Some(GameAction::Submit),
            KeyCode::Backspace => Some(GameAction::Backspace),
            KeyCode::Esc => Some(GameAction::Cancel),
            _ => None,
        },
    }
}

/// Check if key should quit the game.
///
/// Esc quits only while guessing; in the name prompt it cancels the prompt.
pub fn should_quit(key: KeyEvent, mode: InputMode) -> bool {
    (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        || (mode == InputMode::Guess
            && matches!(
                key.code,
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q')
            ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_guess_mode_accepts_only_digits() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('7')), InputMode::Guess),
            Some(GameAction::Char('7'))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('x')), InputMode::Guess),
            None
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('-')), InputMode::Guess),
            None
        );
    }

    #[test]
    fn test_guess_mode_controls() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Enter), InputMode::Guess),
            Some(GameAction::Submit)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Backspace), InputMode::Guess),
            Some(GameAction::Backspace)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('N')), InputMode::Guess),
            Some(GameAction::NewGame)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::F(2)), InputMode::Guess),
            Some(GameAction::NewGame)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Tab), InputMode::Guess),
            Some(GameAction::ToggleLeaderboard)
        );
    }

    #[test]
    fn test_name_mode_takes_letters() {
        // 'n' is a name character here, not "new game".
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('n')), InputMode::Name),
            Some(GameAction::Char('n'))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' ')), InputMode::Name),
            Some(GameAction::Char(' '))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Esc), InputMode::Name),
            Some(GameAction::Cancel)
        );
    }

    #[test]
    fn test_control_chords_are_not_text() {
        assert_eq!(
            handle_key_event(
                KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL),
                InputMode::Name
            ),
            None
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Esc), InputMode::Guess));
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q')), InputMode::Guess));
        assert!(!should_quit(KeyEvent::from(KeyCode::Esc), InputMode::Name));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('q')), InputMode::Name));
        assert!(should_quit(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            InputMode::Name
        ));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x')), InputMode::Guess));
    }
}
