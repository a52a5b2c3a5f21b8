//! Core types for the keymap system: KeyCombo, Modifiers, KeyInput

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Key identifier for the space bar (DOM `KeyboardEvent.key` convention)
pub const SPACE: &str = " ";

/// The four modifier flags of a chord
///
/// Serialized as `{ "ctrl": .., "alt": .., "meta": .., "shift": .. }`.
/// Missing flags deserialize as `false`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    /// Cmd on macOS, Win/Super elsewhere
    pub meta: bool,
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers::new(false, false, false, false);
    pub const CTRL: Modifiers = Modifiers::new(true, false, false, false);
    pub const ALT: Modifiers = Modifiers::new(false, true, false, false);
    pub const META: Modifiers = Modifiers::new(false, false, true, false);
    pub const SHIFT: Modifiers = Modifiers::new(false, false, false, true);

    /// Create modifiers from individual flags
    pub const fn new(ctrl: bool, alt: bool, meta: bool, shift: bool) -> Self {
        Self {
            ctrl,
            alt,
            meta,
            shift,
        }
    }

    /// Check if no modifiers are held
    #[inline]
    pub const fn is_empty(self) -> bool {
        !(self.ctrl || self.alt || self.meta || self.shift)
    }

    /// Combine two modifier sets
    #[inline]
    pub const fn union(self, other: Modifiers) -> Modifiers {
        Modifiers {
            ctrl: self.ctrl || other.ctrl,
            alt: self.alt || other.alt,
            meta: self.meta || other.meta,
            shift: self.shift || other.shift,
        }
    }
}

impl std::ops::BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

/// A configurable shortcut: one key plus an exact modifier set
///
/// The key is compared case-insensitively, so `KeyCombo::new("Z", ..)` and
/// `KeyCombo::new("z", ..)` are the same chord.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct KeyCombo {
    key: String,
    #[serde(default)]
    modifiers: Modifiers,
}

impl KeyCombo {
    /// Create a combo from a key identifier and modifiers
    pub fn new(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
        }
    }

    /// Create a combo with no modifiers
    pub fn plain(key: impl Into<String>) -> Self {
        Self::new(key, Modifiers::NONE)
    }

    /// The key identifier as configured (original case preserved)
    pub fn key_id(&self) -> &str {
        &self.key
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Whether the key identifier is the space bar
    pub fn is_space(&self) -> bool {
        self.key == SPACE
    }
}

impl PartialEq for KeyCombo {
    fn eq(&self, other: &Self) -> bool {
        key_eq(&self.key, &other.key) && self.modifiers == other.modifiers
    }
}

impl Eq for KeyCombo {}

impl Hash for KeyCombo {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.to_lowercase().hash(state);
        self.modifiers.hash(state);
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&super::format::format_key_combo(self))
    }
}

/// Case-insensitive key identifier comparison
pub(crate) fn key_eq(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

/// What the matcher needs from an input event
///
/// Any keyboard event abstraction can be matched against a [`KeyCombo`]
/// as long as it reports a key identifier and the four modifier flags.
pub trait KeyInput {
    /// Key identifier, e.g. `"a"`, `" "`, `"ArrowLeft"`
    fn key(&self) -> &str;

    /// Modifiers held while the key was pressed
    fn modifiers(&self) -> Modifiers;
}

/// A concrete key press
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyPress {
    pub key: String,
    pub modifiers: Modifiers,
}

impl KeyPress {
    pub fn new(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
        }
    }
}

impl KeyInput for KeyPress {
    fn key(&self) -> &str {
        &self.key
    }

    fn modifiers(&self) -> Modifiers {
        self.modifiers
    }
}

impl From<KeyCombo> for KeyPress {
    fn from(combo: KeyCombo) -> Self {
        Self {
            key: combo.key,
            modifiers: combo.modifiers,
        }
    }
}
