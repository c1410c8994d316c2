//! JWT signing configuration.
//!
//! # Environment Variables
//!
//! - `JWT_SECRET`: HMAC secret, at least [`MIN_SECRET_LEN`] bytes (required)
//! - `JWT_ALGORITHM`: `HS256`, `HS384` or `HS512` (default: `HS256`)
//! - `JWT_ACCESS_EXPIRY`: access token lifetime in seconds, at most one day
//!   (default: 1200)
//!
//! Generate a secret with `openssl rand -hex 32`.

use jsonwebtoken::Algorithm;
use secrecy::{ExposeSecret, SecretString};

use crate::{ConfigError, env_lookup, parse_or};

/// Shortest secret accepted, in bytes (256 bits).
pub const MIN_SECRET_LEN: usize = 32;

/// Default access token lifetime: 20 minutes.
pub const DEFAULT_ACCESS_TOKEN_EXPIRY: i64 = 20 * 60;

/// Longest access token lifetime accepted: one day.
pub const MAX_ACCESS_TOKEN_EXPIRY: i64 = 24 * 60 * 60;

#[derive(Debug)]
pub struct JwtConfig {
    pub secret: SecretString,
    pub algorithm: Algorithm,
    /// Access token lifetime in seconds.
    pub access_token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = lookup("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;
        let algorithm = match lookup("JWT_ALGORITHM") {
            Some(raw) => parse_algorithm(raw.trim())?,
            None => Algorithm::HS256,
        };
        let access_token_expiry =
            parse_or(&lookup, "JWT_ACCESS_EXPIRY", DEFAULT_ACCESS_TOKEN_EXPIRY)?;

        let config = Self {
            secret: SecretString::from(secret),
            algorithm,
            access_token_expiry,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks the invariants `from_lookup` enforces. Useful for configs
    /// built field by field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.secret.expose_secret().len() < MIN_SECRET_LEN {
            return Err(ConfigError::Invalid {
                key: "JWT_SECRET",
                reason: format!("must be at least {MIN_SECRET_LEN} bytes"),
            });
        }
        if !is_hmac(self.algorithm) {
            return Err(ConfigError::Invalid {
                key: "JWT_ALGORITHM",
                reason: format!("{:?} is not an HMAC algorithm", self.algorithm),
            });
        }
        if !(1..=MAX_ACCESS_TOKEN_EXPIRY).contains(&self.access_token_expiry) {
            return Err(ConfigError::Invalid {
                key: "JWT_ACCESS_EXPIRY",
                reason: format!("must be between 1 and {MAX_ACCESS_TOKEN_EXPIRY} seconds"),
            });
        }
        Ok(())
    }
}

fn is_hmac(algorithm: Algorithm) -> bool {
    matches!(
        algorithm,
        Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512
    )
}

fn parse_algorithm(raw: &str) -> Result<Algorithm, ConfigError> {
    let algorithm: Algorithm = raw.parse().map_err(|_| ConfigError::Invalid {
        key: "JWT_ALGORITHM",
        reason: format!("unknown algorithm `{raw}`"),
    })?;
    Ok(algorithm)
}
