//! # Jot Auth
//!
//! Authentication for the Jot collaborative note platform.
//!
//! This crate is the identity collaborator of the real-time core: it
//! registers accounts, verifies passwords, and turns logins into bearer
//! session tokens that the HTTP layer checks on every note request.
//!
//! Tokens use the format `jot_<prefix>_<secret>`; only the prefix and an
//! Argon2id hash of the secret are stored, so a leaked store cannot be
//! replayed as credentials.

pub mod account;
pub mod error;
pub mod store;
pub mod token;

pub use account::{Account, PublicAccount};
pub use error::AuthError;
pub use store::AuthStore;
pub use token::{parse_bearer, TokenValue};
