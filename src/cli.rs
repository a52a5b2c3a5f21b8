//! Command-line interface for inspecting and editing keybindings
//!
//! Supports:
//! - Listing the current bindings
//! - Rebinding one action
//! - Resetting to defaults
//! - Checking which action a chord triggers

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::keymap::{parse_key_combo, KeyCombo, KeyPress};
use crate::settings::{Action, FileStorage, SettingsStore, STORE_KEY};

/// Keyboard shortcut settings for declutter
#[derive(Parser, Debug)]
#[command(name = "declutter", version, about = "Manage declutter keybindings")]
pub struct CliArgs {
    /// Directory holding the settings file (defaults to ~/.config/declutter)
    #[arg(long, value_name = "DIR", global = true)]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show the mode and every binding (default)
    Show,
    /// Bind an action to a chord, e.g. `set undo cmd+z`
    Set {
        /// Action name (keep, delete, undo, preview, exploreNext, ...)
        action: String,
        /// Chord such as `ctrl+shift+d`, `space` or `left`
        chord: String,
    },
    /// Restore the default bindings
    Reset,
    /// Print the action a chord triggers in the current mode
    Match {
        chord: String,
    },
    /// Print the settings file location
    Path,
}

impl CliArgs {
    /// Run the selected command, writing human output to `out`
    pub fn run(self, out: &mut impl Write) -> Result<()> {
        let config_dir = self.config_dir;

        match self.command.unwrap_or(CliCommand::Show) {
            CliCommand::Show => show(&SettingsStore::open(config_dir), out)?,
            CliCommand::Set { action, chord } => {
                let mut store = SettingsStore::open(config_dir);
                let action = parse_action(&action)?;
                let combo = parse_chord(&chord)?;
                store.update_keybinding(action, combo);
                warn_if_unsaved(&store, out)?;
                show(&store, out)?;
            }
            CliCommand::Reset => {
                let mut store = SettingsStore::open(config_dir);
                store.reset();
                warn_if_unsaved(&store, out)?;
                show(&store, out)?;
            }
            CliCommand::Match { chord } => {
                let store = SettingsStore::open(config_dir);
                let combo = parse_chord(&chord)?;
                let settings = store.current();
                match settings.action_for(&KeyPress::from(combo.clone())) {
                    Some(action) => writeln!(out, "{} -> {}", combo, action)?,
                    None => writeln!(out, "{} is not bound in {} mode", combo, settings.mode)?,
                }
            }
            CliCommand::Path => {
                let storage = match config_dir {
                    Some(dir) => FileStorage::new(dir),
                    None => FileStorage::user_default()?,
                };
                writeln!(out, "{}", storage.path_for(STORE_KEY).display())?;
            }
        }

        Ok(())
    }
}

fn show(store: &SettingsStore, out: &mut impl Write) -> Result<()> {
    let settings = store.current();
    writeln!(out, "mode: {}", settings.mode)?;
    for (action, combo) in settings.keybindings.iter() {
        let marker = if action.is_active_in(settings.mode) {
            ' '
        } else {
            '-'
        };
        writeln!(
            out,
            "{} {:<16} {:<14} {}",
            marker,
            action.as_str(),
            combo.to_string(),
            action.description()
        )?;
    }
    Ok(())
}

fn warn_if_unsaved(store: &SettingsStore, out: &mut impl Write) -> Result<()> {
    if let Some(e) = store.last_save_error() {
        writeln!(out, "warning: change applied but not saved: {}", e)?;
    }
    Ok(())
}

/// Parse an action name, listing the valid names on failure
pub fn parse_action(name: &str) -> Result<Action> {
    name.parse::<Action>()
        .with_context(|| format!("Expected one of: {}", action_names()))
}

fn parse_chord(chord: &str) -> Result<KeyCombo> {
    parse_key_combo(chord).with_context(|| format!("Invalid chord '{}'", chord))
}

fn action_names() -> String {
    Action::ALL
        .iter()
        .map(|a| a.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
