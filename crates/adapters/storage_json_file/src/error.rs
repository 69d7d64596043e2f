//! Storage-specific error type wrapping IO and JSON errors.

use eventos_domain::error::EventosError;

/// Errors originating from the JSON document store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Reading, writing or renaming the backing file failed.
    #[error("document file error")]
    Io(#[from] std::io::Error),

    /// The document could not be (de)serialized.
    #[error("JSON serialization error")]
    Json(#[from] serde_json::Error),

    /// The document root is not a JSON object.
    #[error("document root must be a JSON object")]
    RootNotAnObject,

    /// A named collection exists but is not a JSON array.
    #[error("collection {name} must be a JSON array")]
    CollectionNotAnArray { name: &'static str },

    /// A stored record does not have the expected shape.
    #[error("record {index} of collection {name} is malformed")]
    InvalidRecord {
        name: &'static str,
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

impl From<StorageError> for EventosError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
