//! Key mapping from terminal events to puzzle actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::{PuzzleAction, SlideDirection};

/// Map keyboard input to puzzle actions.
///
/// Arrows (plus vi/wasd aliases) slide the tile next to the empty slot;
/// digits press a tile directly, which covers every tile on boards up to 3x3.
pub fn map_key(key: KeyEvent) -> Option<PuzzleAction> {
    match key.code {
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(PuzzleAction::Slide(SlideDirection::Left)),
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(PuzzleAction::Slide(SlideDirection::Right)),
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(PuzzleAction::Slide(SlideDirection::Up)),
        KeyCode::Down
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(PuzzleAction::Slide(SlideDirection::Down)),

        KeyCode::Char('n') | KeyCode::Char('N') => Some(PuzzleAction::NewGame),

        KeyCode::Char(ch @ '1'..='9') => Some(PuzzleAction::Press(ch as u8 - b'0')),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
