//! # Todoapp Auth
//!
//! The credential and token authority behind the todoapp API.
//!
//! - [`password`]: bcrypt hashing and verification
//! - [`claims`]: access token claims and the verified identity context
//! - [`jwt`]: token issuance ([`TokenIssuer`]) and verification ([`TokenVerifier`])
//! - [`clock`]: time source used for `exp`, injectable for tests
//! - [`store`]: the credential lookup the authority depends on
//! - [`authority`]: the login flow tying the pieces together
//!
//! Tokens are stateless and cannot be revoked: a token is accepted if and
//! only if its signature verifies and its `exp` lies strictly in the future.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use todoapp_auth::{Authority, SystemClock};
//! use todoapp_config::{JwtConfig, PasswordConfig};
//!
//! let authority = Authority::new(
//!     &JwtConfig::from_env()?,
//!     &PasswordConfig::from_env()?,
//!     Arc::new(SystemClock),
//! )?;
//!
//! let token = authority.login(&store, "alice", "hunter2").await?;
//! let identity = authority.verify(&token)?;
//! ```

pub mod authority;
pub mod claims;
pub mod clock;
pub mod error;
pub mod jwt;
pub mod password;
pub mod store;

pub use authority::Authority;
pub use claims::{AccessClaims, IdentityContext};
#[cfg(any(test, feature = "test-utils"))]
pub use clock::ManualClock;
pub use clock::{Clock, SystemClock};
pub use error::AuthError;
pub use jwt::{TokenIssuer, TokenVerifier};
pub use password::{MAX_PASSWORD_BYTES, PasswordHasher};
pub use store::{CredentialRecord, CredentialStore};
