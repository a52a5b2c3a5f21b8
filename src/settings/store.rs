//! Observable settings store
//!
//! The store is the single source of truth for [`Settings`]. Observers get
//! the current value as soon as they subscribe, then every new value in
//! publish order. Every mutation runs mutate, persist, publish in that
//! order; a failed write is logged and the new value is published anyway.
//!
//! The store is single-threaded (`Rc`/`RefCell`) and lives on the thread that
//! handles input events.

use std::cell::{Cell, RefCell};
use std::path::PathBuf;
use std::rc::{Rc, Weak};

use crate::keymap::KeyCombo;

use super::defaults::default_settings;
use super::error::SettingsError;
use super::persistence;
use super::storage::{FileStorage, MemoryStorage, SettingsStorage};
use super::{Action, Settings};

type Callback = Rc<RefCell<dyn FnMut(&Settings)>>;

struct ObserverEntry {
    id: u64,
    active: Rc<Cell<bool>>,
    callback: Callback,
}

#[derive(Default)]
struct Observers {
    next_id: u64,
    entries: Vec<ObserverEntry>,
}

/// Handle returned by [`SettingsStore::subscribe`]
///
/// Dropping the handle does not unsubscribe.
pub struct Subscription {
    id: u64,
    active: Rc<Cell<bool>>,
    observers: Weak<RefCell<Observers>>,
}

impl Subscription {
    /// Stop future notifications. Calling this again is a no-op.
    pub fn unsubscribe(&self) {
        if !self.active.replace(false) {
            return;
        }
        if let Some(observers) = self.observers.upgrade() {
            observers.borrow_mut().entries.retain(|e| e.id != self.id);
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.active.get())
            .finish()
    }
}

/// Owns the settings value, its storage and its observers
pub struct SettingsStore {
    settings: Settings,
    storage: Box<dyn SettingsStorage>,
    observers: Rc<RefCell<Observers>>,
    last_save_error: Option<SettingsError>,
}

impl SettingsStore {
    /// Load settings from `storage` and take ownership of it
    pub fn new(storage: impl SettingsStorage + 'static) -> Self {
        let settings = persistence::load(&storage);
        Self {
            settings,
            storage: Box::new(storage),
            observers: Rc::new(RefCell::new(Observers::default())),
            last_save_error: None,
        }
    }

    /// Open file-backed settings in `dir`, or in the user config directory
    ///
    /// Without any config directory the store still works, but changes only
    /// last for this process.
    pub fn open(dir: Option<PathBuf>) -> Self {
        let storage = match dir {
            Some(dir) => Ok(FileStorage::new(dir)),
            None => FileStorage::user_default(),
        };
        match storage {
            Ok(storage) => {
                tracing::debug!("Settings directory: {}", storage.dir().display());
                Self::new(storage)
            }
            Err(e) => {
                tracing::warn!("Settings will not persist: {}", e);
                Self::new(MemoryStorage::new())
            }
        }
    }

    /// The current settings
    pub fn current(&self) -> &Settings {
        &self.settings
    }

    /// Register an observer
    ///
    /// The observer is called right away with the current value, then after
    /// every change until the returned subscription is unsubscribed.
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: FnMut(&Settings) + 'static,
    {
        let callback: Callback = Rc::new(RefCell::new(observer));
        let active = Rc::new(Cell::new(true));

        let id = {
            let mut observers = self.observers.borrow_mut();
            let id = observers.next_id;
            observers.next_id += 1;
            observers.entries.push(ObserverEntry {
                id,
                active: Rc::clone(&active),
                callback: Rc::clone(&callback),
            });
            id
        };

        (&mut *callback.borrow_mut())(&self.settings);

        Subscription {
            id,
            active,
            observers: Rc::downgrade(&self.observers),
        }
    }

    /// Number of live observers
    pub fn subscriber_count(&self) -> usize {
        self.observers.borrow().entries.len()
    }

    /// Rebind one action, then persist and publish
    pub fn update_keybinding(&mut self, action: Action, combo: KeyCombo) {
        tracing::info!("Rebinding {} to {}", action, combo);
        let next = self.settings.with_keybinding(action, combo);
        self.commit(next);
    }

    /// Rebind an action given by name
    ///
    /// Unknown names are rejected and leave the settings untouched.
    pub fn update_keybinding_named(
        &mut self,
        action: &str,
        combo: KeyCombo,
    ) -> Result<(), SettingsError> {
        let action: Action = action.parse()?;
        self.update_keybinding(action, combo);
        Ok(())
    }

    /// Restore the defaults, then persist and publish
    pub fn reset(&mut self) {
        tracing::info!("Resetting settings to defaults");
        self.commit(default_settings());
    }

    /// Error from the most recent write, if it failed
    ///
    /// The in-memory value is authoritative either way; this lets a caller
    /// tell the user that a change will not survive a restart.
    pub fn last_save_error(&self) -> Option<&SettingsError> {
        self.last_save_error.as_ref()
    }

    fn commit(&mut self, next: Settings) {
        self.settings = next;

        self.last_save_error = match persistence::save(self.storage.as_mut(), &self.settings) {
            Ok(()) => None,
            Err(e) => {
                tracing::warn!("Failed to save settings: {}", e);
                Some(e)
            }
        };

        self.publish();
    }

    fn publish(&self) {
        // Snapshot so observers may unsubscribe while being notified
        let snapshot: Vec<(Rc<Cell<bool>>, Callback)> = self
            .observers
            .borrow()
            .entries
            .iter()
            .map(|e| (Rc::clone(&e.active), Rc::clone(&e.callback)))
            .collect();

        for (active, callback) in snapshot {
            if active.get() {
                (&mut *callback.borrow_mut())(&self.settings);
            }
        }
    }
}

impl std::fmt::Debug for SettingsStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsStore")
            .field("settings", &self.settings)
            .field("subscribers", &self.subscriber_count())
            .finish_non_exhaustive()
    }
}
