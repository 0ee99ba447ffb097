//! Keyboard polling for the Macroquad backend.
//!
//! Macroquad reports key state per frame, so presses are gathered by polling
//! the bound keys in a fixed order. Keys without a binding never leave this
//! module.

use macroquad::input::{is_key_pressed, KeyCode};
use tkix_core::InputKey;

const BOUND_KEYS: [KeyCode; 5] = [
    KeyCode::Left,
    KeyCode::Up,
    KeyCode::Right,
    KeyCode::Down,
    KeyCode::Space,
];

/// Translates a Macroquad key code into a simulation key, ignoring unbound keys.
#[must_use]
pub fn input_key_for(code: KeyCode) -> Option<InputKey> {
    match code {
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Right => Some(InputKey::Right),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Space => Some(InputKey::Space),
        _ => None,
    }
}

/// Collects the simulation keys reported as pressed by `is_pressed`.
#[must_use]
pub fn pressed_input_keys<F>(is_pressed: F) -> Vec<InputKey>
where
    F: Fn(KeyCode) -> bool,
{
    BOUND_KEYS
        .into_iter()
        .filter(|code| is_pressed(*code))
        .filter_map(input_key_for)
        .collect()
}

/// Snapshot of edge-triggered keyboard shortcuts observed during a single frame.
#[derive(Clone, Debug, Default)]
pub(crate) struct KeyboardShortcuts {
    /// `Q` or `Escape` to quit the game loop.
    pub(crate) quit_requested: bool,
    /// Simulation keys pressed this frame.
    pub(crate) keys: Vec<InputKey>,
}

impl KeyboardShortcuts {
    pub(crate) fn poll() -> Self {
        Self {
            quit_requested: is_key_pressed(KeyCode::Escape) || is_key_pressed(KeyCode::Q),
            keys: pressed_input_keys(is_key_pressed),
        }
    }
}
