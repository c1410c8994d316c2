//! # Todoapp Config
//!
//! Configuration types for the todoapp API.
//!
//! Every configuration struct is loaded from environment variables through
//! `from_env()`. Each one also exposes `from_lookup()`, which takes any
//! `Fn(&str) -> Option<String>` so tests can feed values without touching
//! the process environment.
//!
//! - [`jwt`]: token signing secret, algorithm and access-token lifetime
//! - [`password`]: bcrypt cost factor
//! - [`database`]: PostgreSQL connection settings
//! - [`server`]: HTTP bind address
//!
//! # Example
//!
//! ```ignore
//! use todoapp_config::{JwtConfig, PasswordConfig};
//!
//! let jwt_config = JwtConfig::from_env()?;
//! let password_config = PasswordConfig::from_env()?;
//! ```

pub mod database;
pub mod error;
pub mod jwt;
pub mod password;
pub mod server;

pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use jwt::JwtConfig;
pub use password::PasswordConfig;
pub use server::ServerConfig;

pub(crate) fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Parses an optional variable, falling back to `default` when it is unset.
pub(crate) fn parse_or<T, F>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}
