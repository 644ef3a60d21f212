//! Bearer session tokens.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::Rng;

use crate::error::{AuthError, Result};

/// Token format: jot_<prefix>_<secret>
/// Prefix: 8 lowercase alphanumeric characters
/// Secret: 32 alphanumeric characters (mixed case)
const TOKEN_PREFIX_LEN: usize = 8;
const TOKEN_SECRET_LEN: usize = 32;

/// The plaintext token value (prefix + secret).
///
/// The prefix is stored for lookup; the secret is only ever stored as an
/// Argon2id hash and the full value is shown once at login.
#[derive(Debug, Clone)]
pub struct TokenValue {
    /// First 8 characters for lookup.
    pub prefix: String,
    /// Secret part (32 characters).
    pub secret: String,
}

impl TokenValue {
    /// Generate a new random token value.
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();

        // Prefix: lowercase alphanumeric
        let prefix: String = (0..TOKEN_PREFIX_LEN)
            .map(|_| {
                let idx = rng.gen_range(0..36);
                if idx < 10 {
                    (b'0' + idx) as char
                } else {
                    (b'a' + idx - 10) as char
                }
            })
            .collect();

        // Secret: mixed case alphanumeric
        let secret: String = (0..TOKEN_SECRET_LEN)
            .map(|_| {
                let idx = rng.gen_range(0..62);
                if idx < 10 {
                    (b'0' + idx) as char
                } else if idx < 36 {
                    (b'a' + idx - 10) as char
                } else {
                    (b'A' + idx - 36) as char
                }
            })
            .collect();

        Self { prefix, secret }
    }

    /// Parse a token string into prefix and secret.
    pub fn parse(token: &str) -> Result<Self> {
        // Format: jot_<prefix>_<secret>
        let parts: Vec<&str> = token.split('_').collect();
        if parts.len() != 3 || parts[0] != "jot" {
            return Err(AuthError::InvalidTokenFormat);
        }

        let prefix = parts[1];
        let secret = parts[2];

        if prefix.len() != TOKEN_PREFIX_LEN || secret.len() != TOKEN_SECRET_LEN {
            return Err(AuthError::InvalidTokenFormat);
        }

        Ok(Self {
            prefix: prefix.to_string(),
            secret: secret.to_string(),
        })
    }
}

impl std::fmt::Display for TokenValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "jot_{}_{}", self.prefix, self.secret)
    }
}

/// Hash a secret (password or token secret) using Argon2id.
pub(crate) fn hash_secret(secret: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(secret.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::Crypto(e.to_string()))
}

/// Verify a secret against a stored hash.
pub(crate) fn verify_secret(secret: &str, hash: &str) -> Result<()> {
    let parsed_hash = PasswordHash::new(hash).map_err(|e| AuthError::Crypto(e.to_string()))?;

    Argon2::default()
        .verify_password(secret.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidToken)
}

/// Extract the bearer token from an Authorization header value.
pub fn parse_bearer(header: &str) -> Option<&str> {
    header.trim().strip_prefix("Bearer ").map(str::trim)
}
