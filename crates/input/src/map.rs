//! Key mapping from terminal events to intent roles.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key does in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRole {
    Left,
    Right,
    SoftDrop,
    Rotate,
    HardDrop,
    Hold,
}

impl KeyRole {
    /// Held roles repeat while the key is down; the rest fire once per press.
    pub fn is_held(self) -> bool {
        matches!(self, KeyRole::Left | KeyRole::Right | KeyRole::SoftDrop)
    }
}

/// Map a key to its role, if it has one.
pub fn key_role(key: KeyEvent) -> Option<KeyRole> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(KeyRole::Left)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(KeyRole::Right)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(KeyRole::SoftDrop)
        }

        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W')
        | KeyCode::Char('x')
        | KeyCode::Char('X') => Some(KeyRole::Rotate),

        KeyCode::Char(' ') => Some(KeyRole::HardDrop),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(KeyRole::Hold),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
