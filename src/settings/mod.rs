//! User settings: triage mode and keybindings
//!
//! Settings are loaded once at startup from the `declutter-settings` entry,
//! merged over compiled-in defaults, and owned by a [`SettingsStore`] for the
//! rest of the process. Every mutation goes through the store, which
//! persists and republishes the new value.
//!
//! # Loading
//!
//! ```ignore
//! let mut store = SettingsStore::new(FileStorage::user_default()?);
//! let subscription = store.subscribe(|settings| render(settings));
//! store.update_keybinding(Action::Undo, KeyCombo::new("z", Modifiers::CTRL));
//! ```

mod action;
mod defaults;
mod error;
mod persistence;
mod storage;
mod store;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::keymap::{matches, KeyCombo, KeyInput};

pub use action::Action;
pub use defaults::{default_keybindings, default_settings};
pub use error::{SettingsError, StorageError};
pub use persistence::{load, merge_document, save, STORE_KEY};
pub use storage::{FileStorage, MemoryStorage, SettingsStorage};
pub use store::{SettingsStore, Subscription};

/// Which triage screen is in use
///
/// The store only records the mode; consumers decide which bindings to
/// listen for (see [`Action::active_in`]).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriageMode {
    /// One file at a time, keep or delete
    #[default]
    Classic,
    /// Browse a folder tree and mark items
    Explore,
}

impl TriageMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            TriageMode::Classic => "classic",
            TriageMode::Explore => "explore",
        }
    }
}

impl fmt::Display for TriageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One combo per recognized action
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Keybindings {
    pub keep: KeyCombo,
    pub delete: KeyCombo,
    pub undo: KeyCombo,
    pub preview: KeyCombo,
    pub explore_next: KeyCombo,
    pub explore_previous: KeyCombo,
    pub explore_delete: KeyCombo,
}

impl Keybindings {
    pub fn get(&self, action: Action) -> &KeyCombo {
        match action {
            Action::Keep => &self.keep,
            Action::Delete => &self.delete,
            Action::Undo => &self.undo,
            Action::Preview => &self.preview,
            Action::ExploreNext => &self.explore_next,
            Action::ExplorePrevious => &self.explore_previous,
            Action::ExploreDelete => &self.explore_delete,
        }
    }

    pub fn set(&mut self, action: Action, combo: KeyCombo) {
        let slot = match action {
            Action::Keep => &mut self.keep,
            Action::Delete => &mut self.delete,
            Action::Undo => &mut self.undo,
            Action::Preview => &mut self.preview,
            Action::ExploreNext => &mut self.explore_next,
            Action::ExplorePrevious => &mut self.explore_previous,
            Action::ExploreDelete => &mut self.explore_delete,
        };
        *slot = combo;
    }

    /// All bindings in `Action::ALL` order
    pub fn iter(&self) -> impl Iterator<Item = (Action, &KeyCombo)> {
        Action::ALL.into_iter().map(move |a| (a, self.get(a)))
    }
}

/// The full settings document
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub mode: TriageMode,
    pub keybindings: Keybindings,
}

impl Default for Settings {
    fn default() -> Self {
        default_settings()
    }
}

impl Settings {
    pub fn binding(&self, action: Action) -> &KeyCombo {
        self.keybindings.get(action)
    }

    /// Copy of these settings with one binding replaced
    pub fn with_keybinding(&self, action: Action, combo: KeyCombo) -> Settings {
        let mut next = self.clone();
        next.keybindings.set(action, combo);
        next
    }

    /// The action an input event triggers in the current mode
    ///
    /// Actions are tried in `Action::ALL` order; the first match wins.
    pub fn action_for(&self, event: &impl KeyInput) -> Option<Action> {
        Action::active_in(self.mode).find(|&action| matches(event, self.binding(action)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::{KeyPress, Modifiers};

    #[test]
    fn test_with_keybinding_touches_one_action() {
        let defaults = Settings::default();
        let combo = KeyCombo::new("k", Modifiers::CTRL);
        let next = defaults.with_keybinding(Action::Keep, combo.clone());

        assert_eq!(next.binding(Action::Keep), &combo);
        for action in Action::ALL.into_iter().filter(|a| *a != Action::Keep) {
            assert_eq!(next.binding(action), defaults.binding(action));
        }
        assert_eq!(next.mode, defaults.mode);
    }

    #[test]
    fn test_action_for_default_classic_bindings() {
        let settings = Settings::default();

        let right = KeyPress::new("ArrowRight", Modifiers::NONE);
        assert_eq!(settings.action_for(&right), Some(Action::Keep));

        let undo = KeyPress::new("Z", Modifiers::META);
        assert_eq!(settings.action_for(&undo), Some(Action::Undo));

        let shifted = KeyPress::new("ArrowRight", Modifiers::SHIFT);
        assert_eq!(settings.action_for(&shifted), None);
    }

    #[test]
    fn test_action_for_respects_mode() {
        let mut settings = Settings::default();
        let down = KeyPress::new("ArrowDown", Modifiers::NONE);
        let right = KeyPress::new("ArrowRight", Modifiers::NONE);

        assert_eq!(settings.action_for(&down), None);

        settings.mode = TriageMode::Explore;
        assert_eq!(settings.action_for(&down), Some(Action::ExploreNext));
        assert_eq!(settings.action_for(&right), None);
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(Settings::default()).unwrap();
        assert_eq!(json["mode"], "classic");
        assert_eq!(json["keybindings"]["preview"]["key"], " ");
        assert_eq!(json["keybindings"]["exploreNext"]["key"], "ArrowDown");
        assert_eq!(json["keybindings"]["undo"]["modifiers"]["meta"], true);
    }
}
