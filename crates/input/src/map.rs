//! Mapping from terminal events to game events.

use crate::types::GameEvent;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};

/// Map a terminal event to a game event.
///
/// `locate` converts a terminal (column, row) into a logical pixel and returns
/// `None` for cells outside the board; presses there produce no event.
/// Anything that is neither a button press nor a quit request is dropped.
pub fn map_event(
    event: Event,
    locate: impl FnOnce(u16, u16) -> Option<(i32, i32)>,
) -> Option<GameEvent> {
    match event {
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(_) => {
                locate(mouse.column, mouse.row).map(|(x, y)| GameEvent::PointerDown { x, y })
            }
            _ => None,
        },
        Event::Key(key) if key.kind == KeyEventKind::Press && should_quit(key) => {
            Some(GameEvent::Quit)
        }
        _ => None,
    }
}

/// Check if key asks to close the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
