//! User accounts.

use jot_types::UserId;
use serde::{Deserialize, Serialize};

/// A registered user account.
#[derive(Debug, Clone, Serialize)]
pub struct Account {
    /// Unique user identifier.
    pub id: UserId,
    /// Display name, unique across accounts.
    pub username: String,
    /// Email address, unique across accounts. Login key.
    pub email: String,
    /// Argon2id hash of the password. Never serialized to clients.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// When the account was created.
    pub created_at: u64,
}

impl Account {
    /// Strip credentials for API responses.
    pub fn to_public(&self) -> PublicAccount {
        PublicAccount {
            id: self.id.clone(),
            username: self.username.clone(),
            email: self.email.clone(),
            created_at: self.created_at,
        }
    }
}

/// Account view safe to return to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicAccount {
    /// Unique user identifier.
    pub id: UserId,
    /// Display name.
    pub username: String,
    /// Email address.
    pub email: String,
    /// When the account was created.
    pub created_at: u64,
}
