//! Adapter to convert winit key events to our KeyPress type
//!
//! Named keys are mapped to their DOM `KeyboardEvent.key` names so that
//! persisted combos are the same whichever frontend recorded them.

use winit::keyboard::{Key, ModifiersState, NamedKey};

use super::types::{KeyPress, Modifiers, SPACE};

/// Convert winit modifier state to our Modifiers
///
/// The logo key (Cmd on macOS, Win elsewhere) maps to `meta`.
pub fn modifiers_from_winit(state: ModifiersState) -> Modifiers {
    Modifiers::new(
        state.control_key(),
        state.alt_key(),
        state.super_key(),
        state.shift_key(),
    )
}

/// Convert winit key event data to a KeyPress
///
/// Returns None if the key has no stable identifier (dead keys, unknown keys,
/// named keys the triage screens never bind).
pub fn key_press_from_winit(logical_key: &Key, state: ModifiersState) -> Option<KeyPress> {
    let key = match logical_key {
        Key::Named(named) => named_key_id(*named)?.to_string(),
        Key::Character(s) => {
            if s.is_empty() {
                return None;
            }
            s.to_string()
        }
        _ => return None,
    };

    Some(KeyPress::new(key, modifiers_from_winit(state)))
}

fn named_key_id(named: NamedKey) -> Option<&'static str> {
    let id = match named {
        NamedKey::Space => SPACE,
        NamedKey::Enter => "Enter",
        NamedKey::Escape => "Escape",
        NamedKey::Tab => "Tab",
        NamedKey::Backspace => "Backspace",
        NamedKey::Delete => "Delete",

        // Arrows
        NamedKey::ArrowUp => "ArrowUp",
        NamedKey::ArrowDown => "ArrowDown",
        NamedKey::ArrowLeft => "ArrowLeft",
        NamedKey::ArrowRight => "ArrowRight",

        // Navigation
        NamedKey::Home => "Home",
        NamedKey::End => "End",
        NamedKey::PageUp => "PageUp",
        NamedKey::PageDown => "PageDown",
        NamedKey::Insert => "Insert",

        // Function keys
        NamedKey::F1 => "F1",
        NamedKey::F2 => "F2",
        NamedKey::F3 => "F3",
        NamedKey::F4 => "F4",
        NamedKey::F5 => "F5",
        NamedKey::F6 => "F6",
        NamedKey::F7 => "F7",
        NamedKey::F8 => "F8",
        NamedKey::F9 => "F9",
        NamedKey::F10 => "F10",
        NamedKey::F11 => "F11",
        NamedKey::F12 => "F12",

        _ => return None,
    };
    Some(id)
}
