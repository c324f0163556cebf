use thiserror::Error;

use crate::types::ObjectKind;

/// Main error type for schema extraction
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Object not found: {name}")]
    NotFound { name: String },

    #[error("Storage lookup failed: {message}")]
    StorageLookup { message: String },

    #[error("Unsupported object kind: {kind}")]
    UnsupportedObjectKind { kind: ObjectKind },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type ExtractResult<T> = Result<T, ExtractError>;

impl ExtractError {
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::StorageLookup { message: message.into() }
    }

    pub fn unsupported(kind: ObjectKind) -> Self {
        Self::UnsupportedObjectKind { kind }
    }
}
