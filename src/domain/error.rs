// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Note not found: {0}")]
    NoteNotFound(i64),
    #[error("Folder not found: {0}")]
    FolderNotFound(i64),
    #[error("Stored collection '{key}' is not valid JSON")]
    CorruptCollection {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("No identifier left above {0}")]
    IdSpaceExhausted(i64),
    #[error("Storage error: {0}")]
    StorageError(String),
}
