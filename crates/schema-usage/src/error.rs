//! Library error types.

use thiserror::Error;

/// Errors returned by registry ingestion.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The registry document could not be parsed as JSON.
    #[error("invalid registry document")]
    InvalidRegistry(#[from] serde_json::Error),

    /// The registry document parsed, but its top level is not an object.
    #[error("registry document is not an object")]
    NotAnObject,
}

/// Result type alias using SchemaError.
pub type SchemaResult<T> = Result<T, SchemaError>;
