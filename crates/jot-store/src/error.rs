//! Error types for note persistence.

use thiserror::Error;

/// Result alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur in note store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A field failed validation.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The requested note does not exist.
    #[error("note not found: {0}")]
    NotFound(String),
}
