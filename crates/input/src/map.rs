//! Key mapping from terminal events to counter actions.

use crate::types::{CounterAction, Player};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to counter actions.
///
/// Red sits on the left half of the keyboard (`w`/`s`), Blue on the arrows
/// or vim keys (`k`/`j`).
pub fn handle_key_event(key: KeyEvent) -> Option<CounterAction> {
    // Ctrl+C is quit, never a scoring key.
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        // Red
        KeyCode::Char('w') | KeyCode::Char('W') => Some(CounterAction::Plus(Player::Red)),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(CounterAction::Minus(Player::Red)),

        // Blue
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => {
            Some(CounterAction::Plus(Player::Blue))
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => {
            Some(CounterAction::Minus(Player::Blue))
        }

        // Start / restart
        KeyCode::Enter
        | KeyCode::Char('n')
        | KeyCode::Char('N')
        | KeyCode::Char('r')
        | KeyCode::Char('R') => Some(CounterAction::StartGame),

        _ => None,
    }
}

/// Check if key should quit the counter.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
