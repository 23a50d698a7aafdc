//! # Error Types
//!
//! Errors raised while constructing or decoding the foundational types.
//! Classification errors live in `hedu-status`.

use thiserror::Error;

/// Top-level error type for foundational content types.
#[derive(Error, Debug)]
pub enum HeduError {
    /// A value failed validation at construction.
    #[error("validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for HeduError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}
