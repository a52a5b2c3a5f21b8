//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use declutter::keymap::{KeyCombo, KeyPress, Modifiers};
use declutter::settings::{Settings, SettingsStore, Subscription};

/// A key press with the given modifiers
pub fn press(key: &str, modifiers: Modifiers) -> KeyPress {
    KeyPress::new(key, modifiers)
}

/// Every modifier combination, all sixteen of them
pub fn all_modifier_sets() -> Vec<Modifiers> {
    (0u8..16)
        .map(|bits| {
            Modifiers::new(bits & 1 != 0, bits & 2 != 0, bits & 4 != 0, bits & 8 != 0)
        })
        .collect()
}

/// Combos exercising plain keys, named keys and modifier mixes
pub fn sample_combos() -> Vec<KeyCombo> {
    vec![
        KeyCombo::plain("ArrowRight"),
        KeyCombo::plain(" "),
        KeyCombo::new("z", Modifiers::META),
        KeyCombo::new("D", Modifiers::CTRL | Modifiers::SHIFT),
        KeyCombo::new("Backspace", Modifiers::ALT),
        KeyCombo::new("F5", Modifiers::new(true, true, true, true)),
    ]
}

/// Subscribe and record every published value
pub fn record(store: &SettingsStore) -> (Subscription, Rc<RefCell<Vec<Settings>>>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let subscription = store.subscribe(move |settings| sink.borrow_mut().push(settings.clone()));
    (subscription, seen)
}
