//! Error types for authentication.

use thiserror::Error;

/// Result alias for auth operations.
pub type Result<T> = std::result::Result<T, AuthError>;

/// Errors that can occur in authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// An account with this email or username already exists.
    #[error("already exists: {0}")]
    AlreadyExists(String),

    /// A field failed validation.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Email/password combination did not match an account.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// Token string does not follow the jot_<prefix>_<secret> format.
    #[error("invalid token format")]
    InvalidTokenFormat,

    /// Token is unknown or its secret does not match.
    #[error("invalid token")]
    InvalidToken,

    /// No usable credentials were presented.
    #[error("unauthenticated")]
    Unauthenticated,

    /// Password hashing failure.
    #[error("crypto error: {0}")]
    Crypto(String),
}
