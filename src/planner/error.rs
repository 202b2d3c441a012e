//! Error handling for the planner storage

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The record could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The backing file exists but does not hold a key-value object.
    #[error("Malformed storage file: {0}")]
    Malformed(String),
}
