//! Error types for settings storage and mutation

use std::path::PathBuf;

use thiserror::Error;

/// Failures of the persistent key-value facility
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("no config directory available")]
    NoConfigDir,
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Errors surfaced by settings operations
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("unknown action: {0}")]
    UnknownAction(String),
}
