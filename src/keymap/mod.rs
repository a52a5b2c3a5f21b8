//! Configurable keyboard shortcut primitives
//!
//! This module provides the value types and pure functions the rest of the
//! application uses to interpret key presses:
//! - `KeyCombo`: a key identifier plus an exact modifier set
//! - `matches()`: strict event-to-combo comparison
//! - `format_key_combo()`: short display label (`⌘Z`, `Ctrl+Shift+D`, `←`)
//! - `parse_key_combo()`: chord notation used on the command line
//!
//! # Architecture
//!
//! ```text
//! winit::Key → KeyPress → matches(&press, &combo) → bool
//! ```

mod format;
mod matcher;
mod parse;
mod types;
mod winit_adapter;

pub use format::{format_key_combo, META_GLYPH};
pub use matcher::matches;
pub use parse::{parse_key_combo, ParseKeyComboError};
pub use types::{KeyCombo, KeyInput, KeyPress, Modifiers, SPACE};
pub use winit_adapter::{key_press_from_winit, modifiers_from_winit};
