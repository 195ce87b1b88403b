use std::path::PathBuf;

/// Failure of the underlying key/value backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Stored entries could not be decoded: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Entries could not be encoded: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

pub type Result<T> = std::result::Result<T, StoreError>;
