//! Compiled-in default settings
//!
//! Every action has a binding here, so a merged document is always total.

use crate::keymap::{KeyCombo, Modifiers, SPACE};

use super::{Keybindings, Settings, TriageMode};

pub fn default_keybindings() -> Keybindings {
    Keybindings {
        keep: KeyCombo::plain("ArrowRight"),
        delete: KeyCombo::plain("ArrowLeft"),
        undo: KeyCombo::new("z", Modifiers::META),
        preview: KeyCombo::plain(SPACE),
        explore_next: KeyCombo::plain("ArrowDown"),
        explore_previous: KeyCombo::plain("ArrowUp"),
        explore_delete: KeyCombo::plain("Backspace"),
    }
}

pub fn default_settings() -> Settings {
    Settings {
        mode: TriageMode::Classic,
        keybindings: default_keybindings(),
    }
}
