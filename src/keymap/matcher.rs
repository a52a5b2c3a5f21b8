//! Matching input events against configured key combos
//!
//! Matching is strict: the key must be equal ignoring case, and all four
//! modifier flags must be equal. Holding a modifier the combo does not
//! name is a non-match.

use super::types::{key_eq, KeyCombo, KeyInput};

/// Check whether an input event triggers the given combo
pub fn matches(event: &impl KeyInput, combo: &KeyCombo) -> bool {
    if !key_eq(event.key(), combo.key_id()) {
        return false;
    }

    let held = event.modifiers();
    let wanted = combo.modifiers();

    held.ctrl == wanted.ctrl
        && held.alt == wanted.alt
        && held.meta == wanted.meta
        && held.shift == wanted.shift
}
