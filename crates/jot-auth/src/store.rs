//! In-memory account and session store.

use jot_types::{unix_now, UserId};
use parking_lot::RwLock;
use std::collections::HashMap;

use crate::account::Account;
use crate::error::{AuthError, Result};
use crate::token::{hash_secret, verify_secret, TokenValue};

/// An active login session keyed by token prefix.
#[derive(Debug, Clone)]
struct Session {
    /// Argon2id hash of the token secret.
    token_hash: String,
    /// Account this session belongs to.
    user_id: UserId,
    /// When the session was created.
    #[allow(dead_code)]
    created_at: u64,
}

/// Thread-safe in-memory store for accounts and sessions.
#[derive(Debug, Default)]
pub struct AuthStore {
    /// Accounts by user ID.
    accounts: RwLock<HashMap<UserId, Account>>,
    /// Email to user ID mapping.
    email_index: RwLock<HashMap<String, UserId>>,
    /// Username to user ID mapping.
    username_index: RwLock<HashMap<String, UserId>>,
    /// Sessions by token prefix.
    sessions: RwLock<HashMap<String, Session>>,
}

impl AuthStore {
    /// Create a new empty auth store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new account.
    pub fn register(&self, username: String, email: String, password: String) -> Result<Account> {
        if username.trim().is_empty() {
            return Err(AuthError::Validation("username cannot be empty".into()));
        }
        if email.trim().is_empty() || !email.contains('@') {
            return Err(AuthError::Validation("invalid email address".into()));
        }
        if password.is_empty() {
            return Err(AuthError::Validation("password cannot be empty".into()));
        }

        if self.email_index.read().contains_key(&email) {
            return Err(AuthError::AlreadyExists(format!("account '{}'", email)));
        }
        if self.username_index.read().contains_key(&username) {
            return Err(AuthError::AlreadyExists(format!("username '{}'", username)));
        }

        let account = Account {
            id: uuid::Uuid::new_v4().to_string(),
            username: username.clone(),
            email: email.clone(),
            password_hash: hash_secret(&password)?,
            created_at: unix_now(),
        };

        self.email_index.write().insert(email, account.id.clone());
        self.username_index
            .write()
            .insert(username, account.id.clone());
        self.accounts
            .write()
            .insert(account.id.clone(), account.clone());

        Ok(account)
    }

    /// Log in with email and password, creating a new session.
    ///
    /// Returns the plaintext bearer token (shown only once) and the account.
    pub fn login(&self, email: &str, password: &str) -> Result<(String, Account)> {
        let account = self
            .account_by_email(email)
            .ok_or(AuthError::InvalidCredentials)?;

        verify_secret(password, &account.password_hash)
            .map_err(|_| AuthError::InvalidCredentials)?;

        let token = TokenValue::generate();
        let session = Session {
            token_hash: hash_secret(&token.secret)?,
            user_id: account.id.clone(),
            created_at: unix_now(),
        };

        self.sessions.write().insert(token.prefix.clone(), session);

        Ok((token.to_string(), account))
    }

    /// Revoke the session behind a bearer token. Unknown tokens are a no-op.
    pub fn logout(&self, token: &str) {
        if let Ok(value) = TokenValue::parse(token) {
            self.sessions.write().remove(&value.prefix);
        }
    }

    /// Verify a bearer token and return the authenticated user ID.
    pub fn verify(&self, token: &str) -> Result<UserId> {
        let value = TokenValue::parse(token)?;

        let session = self
            .sessions
            .read()
            .get(&value.prefix)
            .cloned()
            .ok_or(AuthError::InvalidToken)?;

        verify_secret(&value.secret, &session.token_hash)?;

        Ok(session.user_id)
    }

    /// Get an account by user ID.
    pub fn get_account(&self, user_id: &str) -> Option<Account> {
        self.accounts.read().get(user_id).cloned()
    }

    /// Get an account by email.
    fn account_by_email(&self, email: &str) -> Option<Account> {
        let id = self.email_index.read().get(email).cloned()?;
        self.get_account(&id)
    }

    /// Number of active sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.read().len()
    }
}
