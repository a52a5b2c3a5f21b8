//! Benchmarks for the per-keystroke paths
//!
//! Every key press runs `action_for`, which matches against each binding
//! active in the current mode. Labels are formatted on every render of the
//! settings panel.
//!
//! Run with: cargo bench keybindings

use declutter::keymap::{format_key_combo, matches, parse_key_combo, KeyCombo, KeyPress, Modifiers};
use declutter::settings::{default_settings, merge_document, Action, Settings, TriageMode};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn presses() -> Vec<KeyPress> {
    vec![
        KeyPress::new("ArrowRight", Modifiers::NONE),
        KeyPress::new("ArrowLeft", Modifiers::NONE),
        KeyPress::new("Z", Modifiers::META),
        KeyPress::new(" ", Modifiers::NONE),
        KeyPress::new("q", Modifiers::CTRL | Modifiers::SHIFT),
    ]
}

// ============================================================================
// Matching
// ============================================================================

#[divan::bench]
fn matches_single(bencher: divan::Bencher) {
    let combo = KeyCombo::new("z", Modifiers::META);
    let press = KeyPress::new("Z", Modifiers::META);

    bencher.bench_local(|| divan::black_box(matches(divan::black_box(&press), &combo)));
}

#[divan::bench(args = [TriageMode::Classic, TriageMode::Explore])]
fn action_for(bencher: divan::Bencher, mode: TriageMode) {
    let settings = Settings {
        mode,
        ..default_settings()
    };
    let presses = presses();

    bencher.bench_local(|| {
        let mut hits = 0;
        for press in &presses {
            if settings.action_for(divan::black_box(press)).is_some() {
                hits += 1;
            }
        }
        divan::black_box(hits)
    });
}

// ============================================================================
// Formatting
// ============================================================================

#[divan::bench]
fn format_all_defaults(bencher: divan::Bencher) {
    let settings = default_settings();

    bencher.bench_local(|| {
        let labels: Vec<String> = Action::ALL
            .iter()
            .map(|a| format_key_combo(settings.binding(*a)))
            .collect();
        divan::black_box(labels)
    });
}

// ============================================================================
// Loading
// ============================================================================

#[divan::bench]
fn merge_stored_document(bencher: divan::Bencher) {
    let settings = default_settings().with_keybinding(
        Action::Keep,
        parse_key_combo("ctrl+shift+k").unwrap_or_else(|_| KeyCombo::plain("k")),
    );
    let document = serde_json::to_value(&settings).unwrap();

    bencher.bench_local(|| divan::black_box(merge_document(divan::black_box(&document))));
}
