//! Error types for Eco-Code Core

use thiserror::Error;

/// Main error type for Eco-Code operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("File tree error: {0}")]
    Tree(#[from] TreeError),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Connection pool error: {0}")]
    Pool(String),
}

/// File tree construction errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TreeError {
    #[error("Duplicate node id: {0}")]
    DuplicateId(String),
}

/// Panel sizing faults. These are recovered locally and only ever logged.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PanelError {
    #[error("Invalid persisted size under {key:?}: {value:?}")]
    InvalidPersistedState { key: String, value: String },
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        Error::Storage(StorageError::Database(err.to_string()))
    }
}

impl From<r2d2::Error> for Error {
    fn from(err: r2d2::Error) -> Self {
        Error::Storage(StorageError::Pool(err.to_string()))
    }
}

impl serde::Serialize for Error {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;
