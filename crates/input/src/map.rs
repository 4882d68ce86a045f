//! Key mapping from terminal events to game actions.

use crate::types::{Choice, GameAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Choices, by position or initial
        KeyCode::Char('1') | KeyCode::Char('r') | KeyCode::Char('R') => {
            Some(GameAction::Play(Choice::Rock))
        }
        KeyCode::Char('2') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(GameAction::Play(Choice::Scissors))
        }
        KeyCode::Char('3') | KeyCode::Char('p') | KeyCode::Char('P') => {
            Some(GameAction::Play(Choice::Paper))
        }

        // Reset score
        KeyCode::Backspace | KeyCode::Delete | KeyCode::Char('c') | KeyCode::Char('C')
            if !key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            Some(GameAction::Reset)
        }

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
