//! Human-readable labels for key combos
//!
//! Modifiers come first in a fixed order (`⌘`, `Ctrl`, `Alt`, `Shift`),
//! the key label last. With `⌘` present the parts are written back to back
//! (`⌘ShiftZ`); otherwise they are joined with `+` (`Ctrl+Shift+Z`).

use super::types::KeyCombo;

/// Glyph used for the meta modifier
pub const META_GLYPH: &str = "⌘";

/// Render a combo for display in the settings screen
pub fn format_key_combo(combo: &KeyCombo) -> String {
    let mods = combo.modifiers();
    let mut parts: Vec<String> = Vec::with_capacity(5);

    if mods.meta {
        parts.push(META_GLYPH.to_string());
    }
    if mods.ctrl {
        parts.push("Ctrl".to_string());
    }
    if mods.alt {
        parts.push("Alt".to_string());
    }
    if mods.shift {
        parts.push("Shift".to_string());
    }

    parts.push(key_label(combo.key_id()).to_uppercase());

    let separator = if mods.meta { "" } else { "+" };
    parts.join(separator)
}

/// Display label for a key identifier, before upper-casing
fn key_label(key: &str) -> &str {
    match key {
        " " => "Space",
        "ArrowRight" => "→",
        "ArrowLeft" => "←",
        "ArrowUp" => "↑",
        "ArrowDown" => "↓",
        other => other,
    }
}
