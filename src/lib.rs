//! declutter - keyboard shortcut settings for file triage
//!
//! This crate owns the user's keybindings: it persists them across sessions,
//! exposes an observable store for UI binding, and provides the matching and
//! formatting logic the triage screens use to interpret key presses.

pub mod cli;
pub mod config_paths;
pub mod keymap;
pub mod settings;
pub mod tracing;

// Re-export commonly used types
pub use keymap::{format_key_combo, matches, KeyCombo, KeyInput, KeyPress, Modifiers};
pub use settings::{Action, Settings, SettingsStore, Subscription, TriageMode};
