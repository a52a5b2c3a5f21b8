//! Local key-value storage for persisted settings
//!
//! `FileStorage` keeps each key in its own JSON file under the config
//! directory. `MemoryStorage` is a process-local stand-in, used when no
//! config directory exists and in tests, where it can be told to fail.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use super::error::StorageError;

/// A persistent key-value facility scoped to the application
pub trait SettingsStorage {
    /// Read the value stored under `key`; `Ok(None)` if nothing was stored
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Stores `<key>.json` files in a directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Storage in the user's config directory (`~/.config/declutter/`)
    pub fn user_default() -> Result<Self, StorageError> {
        crate::config_paths::config_dir()
            .map(Self::new)
            .ok_or(StorageError::NoConfigDir)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing a key
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl SettingsStorage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Read { path, source }),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        fs::create_dir_all(&self.dir).map_err(|source| StorageError::Write {
            path: self.dir.clone(),
            source,
        })?;
        fs::write(&path, value).map_err(|source| StorageError::Write { path, source })
    }
}

#[derive(Debug, Default)]
struct MemoryState {
    entries: HashMap<String, String>,
    fail_reads: bool,
    fail_writes: bool,
    writes: usize,
}

/// In-memory storage
///
/// Clones share the same entries, so a test can keep a handle while a store
/// owns another, and a "restart" is a new store over a clone.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    state: Rc<RefCell<MemoryState>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with one entry
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .state
            .borrow_mut()
            .entries
            .insert(key.to_string(), value.to_string());
        storage
    }

    /// Make every read fail, as if the facility were inaccessible
    pub fn set_fail_reads(&self, fail: bool) {
        self.state.borrow_mut().fail_reads = fail;
    }

    /// Make every write fail, as if the quota were exceeded
    pub fn set_fail_writes(&self, fail: bool) {
        self.state.borrow_mut().fail_writes = fail;
    }

    /// Current raw value under `key`
    pub fn get(&self, key: &str) -> Option<String> {
        self.state.borrow().entries.get(key).cloned()
    }

    /// Number of successful writes so far
    pub fn writes(&self) -> usize {
        self.state.borrow().writes
    }
}

impl SettingsStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let state = self.state.borrow();
        if state.fail_reads {
            return Err(StorageError::Unavailable("reads disabled".to_string()));
        }
        Ok(state.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut state = self.state.borrow_mut();
        if state.fail_writes {
            return Err(StorageError::Unavailable("quota exceeded".to_string()));
        }
        state.entries.insert(key.to_string(), value.to_string());
        state.writes += 1;
        Ok(())
    }
}
