//! Password hashing with bcrypt.
//!
//! bcrypt salts every digest, so hashing the same plaintext twice never
//! yields the same string. Verification re-derives the digest with the
//! embedded salt and cost and compares in constant time inside the
//! `bcrypt` crate.
//!
//! bcrypt reads at most [`MAX_PASSWORD_BYTES`] of input. Longer passwords
//! are refused rather than silently cut, so two passwords sharing their
//! first 72 bytes never verify against each other.

use bcrypt::BcryptError;
use todoapp_config::PasswordConfig;

use crate::AuthError;

/// Longest password bcrypt hashes without truncation.
pub const MAX_PASSWORD_BYTES: usize = 72;

#[derive(Clone, Copy, Debug)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn from_config(config: &PasswordConfig) -> Self {
        Self::new(config.bcrypt_cost)
    }

    /// # Errors
    ///
    /// [`AuthError::PasswordTooLong`] past [`MAX_PASSWORD_BYTES`].
    pub fn hash(&self, plaintext: &str) -> Result<String, AuthError> {
        bcrypt::non_truncating_hash(plaintext, self.cost).map_err(|err| match err {
            BcryptError::Truncation(_) => AuthError::PasswordTooLong {
                max: MAX_PASSWORD_BYTES,
            },
            other => AuthError::Hashing(other),
        })
    }

    /// Returns `Ok(false)` on mismatch. A `digest` that is not a bcrypt
    /// hash is an error, not a mismatch.
    pub fn verify(&self, plaintext: &str, digest: &str) -> Result<bool, AuthError> {
        match bcrypt::non_truncating_verify(plaintext, digest) {
            // `hash` never stores a digest for such a password.
            Err(BcryptError::Truncation(_)) => Ok(false),
            result => Ok(result?),
        }
    }
}
