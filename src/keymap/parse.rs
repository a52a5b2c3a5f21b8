//! Parsing of human chord notation like `cmd+shift+z`
//!
//! Used by the command-line tool. Produces combos with DOM key identifiers
//! so parsed chords compare equal to recorded ones.

use thiserror::Error;

use super::types::{KeyCombo, Modifiers, SPACE};

/// Errors that can occur when parsing a chord string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseKeyComboError {
    #[error("empty key binding")]
    Empty,
    #[error("no key found in binding: {0}")]
    MissingKey(String),
    #[error("multiple keys in binding: {0}")]
    MultipleKeys(String),
    #[error("unknown key: {0}")]
    UnknownKey(String),
}

/// Parse a chord string like "cmd+shift+z" into a KeyCombo
///
/// A literal `+` key can be written as the last part: `shift++`.
pub fn parse_key_combo(input: &str) -> Result<KeyCombo, ParseKeyComboError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseKeyComboError::Empty);
    }

    let mut parts: Vec<&str> = trimmed.split('+').collect();
    // "ctrl++" splits into ["ctrl", "", ""]
    if trimmed.ends_with("++") || trimmed == "+" {
        parts.truncate(parts.len().saturating_sub(2));
        parts.push("+");
    }

    let mut mods = Modifiers::NONE;
    let mut key_part: Option<String> = None;

    for part in parts {
        let part_lower = part.trim().to_lowercase();
        match part_lower.as_str() {
            "cmd" | "command" | "meta" | "super" | "win" => mods = mods | Modifiers::META,
            "ctrl" | "control" => mods = mods | Modifiers::CTRL,
            "alt" | "option" | "opt" => mods = mods | Modifiers::ALT,
            "shift" => mods = mods | Modifiers::SHIFT,
            "" => return Err(ParseKeyComboError::MissingKey(input.to_string())),
            _ => {
                if key_part.is_some() {
                    return Err(ParseKeyComboError::MultipleKeys(input.to_string()));
                }
                key_part = Some(parse_key_id(&part_lower)?);
            }
        }
    }

    let key = key_part.ok_or_else(|| ParseKeyComboError::MissingKey(input.to_string()))?;
    Ok(KeyCombo::new(key, mods))
}

/// Map a lower-cased key name to its DOM key identifier
fn parse_key_id(key: &str) -> Result<String, ParseKeyComboError> {
    // Single character
    if key.chars().count() == 1 {
        return Ok(key.to_string());
    }

    let id = match key {
        "space" | "spacebar" => SPACE,
        "enter" | "return" => "Enter",
        "escape" | "esc" => "Escape",
        "tab" => "Tab",
        "backspace" | "back" => "Backspace",
        "delete" | "del" => "Delete",

        "up" | "arrowup" => "ArrowUp",
        "down" | "arrowdown" => "ArrowDown",
        "left" | "arrowleft" => "ArrowLeft",
        "right" | "arrowright" => "ArrowRight",

        "home" => "Home",
        "end" => "End",
        "pageup" | "pgup" => "PageUp",
        "pagedown" | "pgdown" | "pgdn" => "PageDown",
        "insert" | "ins" => "Insert",

        _ => return parse_function_key(key),
    };
    Ok(id.to_string())
}

fn parse_function_key(key: &str) -> Result<String, ParseKeyComboError> {
    key.strip_prefix('f')
        .and_then(|n| n.parse::<u8>().ok())
        .filter(|n| (1..=12).contains(n))
        .map(|n| format!("F{}", n))
        .ok_or_else(|| ParseKeyComboError::UnknownKey(key.to_string()))
}
