//! Access token claims.
//!
//! Issued tokens carry a flat claim set:
//!
//! ```json
//! { "sub": "alice", "id": 42, "role": "user", "exp": 1700001200 }
//! ```
//!
//! [`AccessClaims`] is what gets signed. Decoding goes through
//! [`RawClaims`], where every field is optional, so that a token with an
//! absent or `null` claim is reported as missing claims rather than as a
//! structural failure.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Claims written into every access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Username (subject claim)
    pub sub: String,
    /// Stable numeric user ID
    pub id: i64,
    /// Role tag
    pub role: String,
    /// Expiration timestamp (Unix seconds)
    pub exp: i64,
}

/// Claims as read back from a token whose signature already verified.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawClaims {
    pub sub: Option<String>,
    pub id: Option<i64>,
    pub role: Option<String>,
    pub exp: Option<i64>,
}

/// The verified identity behind a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IdentityContext {
    #[schema(example = "alice")]
    pub username: String,
    #[schema(example = 42)]
    pub user_id: i64,
    #[schema(example = "user")]
    pub user_role: Option<String>,
}
