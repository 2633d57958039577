//! Key mapping from terminal events to game commands.

use crate::types::GameCommand;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to game commands.
///
/// Arrows, `a`/`d`/`s` and the vi keys `h`/`l` move the piece; `j` and Up
/// rotate clockwise, `k` and `z` counter-clockwise.
pub fn handle_key_event(key: KeyEvent) -> Option<GameCommand> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h' | 'H' | 'a' | 'A') => Some(GameCommand::MoveLeft),
        KeyCode::Right | KeyCode::Char('l' | 'L' | 'd' | 'D') => Some(GameCommand::MoveRight),
        KeyCode::Down | KeyCode::Char('s' | 'S') => Some(GameCommand::SoftDrop),

        // Rotation
        KeyCode::Up | KeyCode::Char('j' | 'J') => Some(GameCommand::RotateCw),
        KeyCode::Char('k' | 'K' | 'z' | 'Z') => Some(GameCommand::RotateCcw),

        _ => None,
    }
}

/// Presses and terminal auto-repeat act; releases are ignored.
pub fn is_actionable(key: KeyEvent) -> bool {
    matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat)
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
