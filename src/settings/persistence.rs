//! Loading and saving settings
//!
//! Loading never fails: anything missing or malformed falls back to the
//! defaults, with a warning. The persisted document is merged over the
//! defaults one field at a time, so a document written before an action
//! existed still yields a complete binding table, and a bad entry for one
//! action only costs that action its override.

use serde_json::{Map, Value};

use crate::keymap::KeyCombo;

use super::defaults::default_settings;
use super::error::SettingsError;
use super::storage::SettingsStorage;
use super::{Action, Settings, TriageMode};

/// Storage key of the settings document
pub const STORE_KEY: &str = "declutter-settings";

/// Load settings from storage, merged over the defaults
pub fn load(storage: &dyn SettingsStorage) -> Settings {
    let raw = match storage.read(STORE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!("No stored settings under {}, using defaults", STORE_KEY);
            return default_settings();
        }
        Err(e) => {
            tracing::warn!("Failed to load settings: {}", e);
            return default_settings();
        }
    };

    match serde_json::from_str::<Value>(&raw) {
        Ok(document) => {
            let settings = merge_document(&document);
            tracing::info!("Loaded settings ({} mode)", settings.mode);
            settings
        }
        Err(e) => {
            tracing::warn!("Failed to parse stored settings: {}", e);
            default_settings()
        }
    }
}

/// Merge a persisted document over the defaults
///
/// `mode` and each action under `keybindings` are taken from the document
/// when present and well-formed; everything else keeps its default.
/// Unknown keys are ignored.
pub fn merge_document(document: &Value) -> Settings {
    let mut settings = default_settings();

    let Some(root) = document.as_object() else {
        tracing::warn!("Stored settings are not an object, using defaults");
        return settings;
    };

    if let Some(mode) = root.get("mode") {
        match serde_json::from_value::<TriageMode>(mode.clone()) {
            Ok(mode) => settings.mode = mode,
            Err(e) => tracing::warn!("Ignoring stored mode {}: {}", mode, e),
        }
    }

    match root.get("keybindings") {
        Some(Value::Object(bindings)) => merge_keybindings(&mut settings, bindings),
        Some(other) => tracing::warn!("Ignoring stored keybindings, not an object: {}", other),
        None => {}
    }

    settings
}

fn merge_keybindings(settings: &mut Settings, bindings: &Map<String, Value>) {
    for action in Action::ALL {
        let Some(value) = bindings.get(action.as_str()) else {
            continue;
        };
        match parse_combo(value) {
            Ok(combo) => settings.keybindings.set(action, combo),
            Err(reason) => {
                tracing::warn!("Ignoring stored binding for {}: {}", action, reason);
            }
        }
    }

    let unknown = bindings
        .keys()
        .filter(|name| name.parse::<Action>().is_err())
        .count();
    if unknown > 0 {
        tracing::debug!("Ignored {} unknown stored keybinding(s)", unknown);
    }
}

fn parse_combo(value: &Value) -> Result<KeyCombo, String> {
    let combo: KeyCombo = serde_json::from_value(value.clone()).map_err(|e| e.to_string())?;
    if combo.key_id().is_empty() {
        return Err("empty key".to_string());
    }
    Ok(combo)
}

/// Serialize settings and write them under [`STORE_KEY`]
pub fn save(storage: &mut dyn SettingsStorage, settings: &Settings) -> Result<(), SettingsError> {
    let content = serde_json::to_string(settings)?;
    storage.write(STORE_KEY, &content)?;
    tracing::debug!("Saved settings under {}", STORE_KEY);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::Modifiers;
    use crate::settings::MemoryStorage;
    use serde_json::json;

    fn load_str(raw: &str) -> Settings {
        load(&MemoryStorage::with_entry(STORE_KEY, raw))
    }

    #[test]
    fn test_absent_document_gives_defaults() {
        assert_eq!(load(&MemoryStorage::new()), default_settings());
    }

    #[test]
    fn test_unreadable_storage_gives_defaults() {
        let storage = MemoryStorage::with_entry(STORE_KEY, r#"{"mode":"explore"}"#);
        storage.set_fail_reads(true);
        assert_eq!(load(&storage), default_settings());
    }

    #[test]
    fn test_malformed_documents_give_defaults() {
        for raw in ["", "{", "not json", "null", "42", "[]", "\"classic\"", "{\"keybindings\":7}"] {
            assert_eq!(load_str(raw), default_settings(), "input: {:?}", raw);
        }
    }

    #[test]
    fn test_subset_overrides_only_named_actions() {
        let settings = load_str(
            r#"{"keybindings":{"keep":{"key":"k","modifiers":{"ctrl":false,"alt":false,"meta":false,"shift":false}}}}"#,
        );
        let defaults = default_settings();

        assert_eq!(settings.binding(Action::Keep), &KeyCombo::plain("k"));
        for action in Action::ALL.into_iter().filter(|a| *a != Action::Keep) {
            assert_eq!(settings.binding(action), defaults.binding(action));
        }
        assert_eq!(settings.mode, TriageMode::Classic);
    }

    #[test]
    fn test_document_from_before_explore_mode() {
        let document = json!({
            "keybindings": {
                "keep": { "key": "d", "modifiers": { "ctrl": false, "alt": false, "meta": false, "shift": false } },
                "delete": { "key": "a", "modifiers": { "ctrl": false, "alt": false, "meta": false, "shift": false } },
                "undo": { "key": "u", "modifiers": { "ctrl": true, "alt": false, "meta": false, "shift": false } },
                "preview": { "key": "p", "modifiers": { "ctrl": false, "alt": false, "meta": false, "shift": false } }
            }
        });
        let settings = merge_document(&document);

        assert_eq!(settings.binding(Action::Undo), &KeyCombo::new("u", Modifiers::CTRL));
        assert_eq!(
            settings.binding(Action::ExploreNext),
            default_settings().binding(Action::ExploreNext)
        );
    }

    #[test]
    fn test_unknown_keys_are_tolerated() {
        let document = json!({
            "version": 3,
            "theme": "dark",
            "keybindings": {
                "archive": { "key": "a" },
                "preview": { "key": "Enter" }
            }
        });
        let settings = merge_document(&document);

        assert_eq!(settings.binding(Action::Preview), &KeyCombo::plain("Enter"));
    }

    #[test]
    fn test_malformed_entry_rejected_per_action() {
        let document = json!({
            "keybindings": {
                "keep": { "key": 5 },
                "delete": "ArrowLeft",
                "undo": { "key": "" },
                "preview": { "key": "p", "modifiers": { "shift": "yes" } },
                "exploreNext": { "key": "j" }
            }
        });
        let settings = merge_document(&document);
        let defaults = default_settings();

        for action in [Action::Keep, Action::Delete, Action::Undo, Action::Preview] {
            assert_eq!(settings.binding(action), defaults.binding(action), "{}", action);
        }
        assert_eq!(settings.binding(Action::ExploreNext), &KeyCombo::plain("j"));
    }

    #[test]
    fn test_mode_taken_when_valid() {
        assert_eq!(merge_document(&json!({ "mode": "explore" })).mode, TriageMode::Explore);
        assert_eq!(merge_document(&json!({ "mode": "turbo" })).mode, TriageMode::Classic);
        assert_eq!(merge_document(&json!({ "mode": 1 })).mode, TriageMode::Classic);
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let mut storage = MemoryStorage::new();
        let settings = default_settings().with_keybinding(Action::Delete, KeyCombo::plain("x"));

        save(&mut storage, &settings).unwrap();

        assert_eq!(load(&storage), settings);
    }

    #[test]
    fn test_save_failure_is_reported() {
        let mut storage = MemoryStorage::new();
        storage.set_fail_writes(true);

        let err = save(&mut storage, &default_settings()).unwrap_err();
        assert!(matches!(err, SettingsError::Storage(_)));
    }
}
