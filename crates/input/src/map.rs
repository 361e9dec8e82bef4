//! Key mapping from terminal events to simulation events.

use crate::types::{Axis, InputEvent, MOVE_STEP, ROTATION_STEP};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to simulation events.
pub fn handle_key_event(key: KeyEvent) -> Option<InputEvent> {
    match key.code {
        // Player movement
        KeyCode::Up => Some(InputEvent::translate(0.0, -MOVE_STEP, 0.0)),
        KeyCode::Down => Some(InputEvent::translate(0.0, MOVE_STEP, 0.0)),
        KeyCode::Left => Some(InputEvent::translate(-MOVE_STEP, 0.0, 0.0)),
        KeyCode::Right => Some(InputEvent::translate(MOVE_STEP, 0.0, 0.0)),

        // Field rotation
        KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => None,
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'w' => Some(InputEvent::rotate(Axis::X, -ROTATION_STEP)),
            's' => Some(InputEvent::rotate(Axis::X, ROTATION_STEP)),
            'a' => Some(InputEvent::rotate(Axis::Y, -ROTATION_STEP)),
            'd' => Some(InputEvent::rotate(Axis::Y, ROTATION_STEP)),
            'q' => Some(InputEvent::rotate(Axis::Z, -ROTATION_STEP)),
            'e' => Some(InputEvent::rotate(Axis::Z, ROTATION_STEP)),
            _ => None,
        },

        _ => None,
    }
}

/// Check if key should quit.
///
/// `q` rotates about z, so quitting is Esc or Ctrl-C.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
