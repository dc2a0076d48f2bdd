//! Password value object - Domain layer password handling.
//!
//! Hashes with bcrypt at a fixed work factor so stored hashes stay
//! interoperable with other bcrypt implementations.

use crate::config::{BCRYPT_COST, PASSWORD_MIN_LENGTH};
use crate::errors::{AppError, AppResult};

/// Password value object that handles hashing and verification.
///
/// Only ever holds a hash; the plain text never outlives `new`.
#[derive(Clone)]
pub struct Password {
    hash: String,
}

// Don't expose hash in debug output (security)
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Create a new password by hashing the plain text.
    ///
    /// # Errors
    /// Returns a validation error if the password is too short, or an
    /// internal error if bcrypt fails.
    pub fn new(plain_text: &str) -> AppResult<Self> {
        if plain_text.len() < PASSWORD_MIN_LENGTH as usize {
            return Err(AppError::validation(format!(
                "password must be at least {} characters",
                PASSWORD_MIN_LENGTH
            )));
        }

        let hash = bcrypt::hash(plain_text, BCRYPT_COST)
            .map_err(|e| AppError::internal(format!("Password hash failed: {}", e)))?;
        Ok(Self { hash })
    }

    /// Create a Password from an existing hash (from database).
    pub fn from_hash(hash: String) -> Self {
        Self { hash }
    }

    /// Get the hash string for storage.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Consume and return the hash string.
    pub fn into_string(self) -> String {
        self.hash
    }

    /// Verify a plain text password against this hash.
    ///
    /// A malformed stored hash never verifies.
    pub fn verify(&self, plain_text: &str) -> bool {
        bcrypt::verify(plain_text, &self.hash).unwrap_or(false)
    }
}
