//! Access token issuance and verification.
//!
//! Tokens use the JWT compact form `header.claims.signature`, each part
//! URL-safe base64, signed with the HMAC algorithm from [`JwtConfig`].
//!
//! Verification runs these checks in order and stops at the first failure:
//!
//! 1. structure (three parts, decodable header) -> [`AuthError::Malformed`]
//! 2. signature and header algorithm -> [`AuthError::BadSignature`]
//! 3. `exp` strictly after now, no leeway -> [`AuthError::Expired`]
//! 4. `sub` and `id` present -> [`AuthError::MissingClaims`]
//!
//! `jsonwebtoken` covers the first two. Expiry is checked here against the
//! injected [`Clock`] so the library's own wall-clock check and leeway are
//! switched off.

use std::sync::Arc;

use chrono::Duration;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::ExposeSecret;
use todoapp_config::JwtConfig;
use tracing::debug;

use crate::claims::{AccessClaims, IdentityContext, RawClaims};
use crate::{AuthError, Clock};

pub struct TokenIssuer {
    header: Header,
    key: EncodingKey,
    clock: Arc<dyn Clock>,
}

impl TokenIssuer {
    pub fn new(config: &JwtConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            header: Header::new(config.algorithm),
            key: EncodingKey::from_secret(config.secret.expose_secret().as_bytes()),
            clock,
        }
    }

    /// Signs `{sub, id, role, exp: now + ttl}`.
    ///
    /// # Errors
    ///
    /// - [`AuthError::ExpiryOutOfRange`] if `now + ttl` overflows the calendar
    /// - [`AuthError::Signing`] if encoding fails, which does not happen with
    ///   an HMAC key and these claims
    pub fn issue(
        &self,
        username: &str,
        user_id: i64,
        role: &str,
        ttl: Duration,
    ) -> Result<String, AuthError> {
        let exp = self
            .clock
            .now()
            .checked_add_signed(ttl)
            .ok_or(AuthError::ExpiryOutOfRange)?;
        let claims = AccessClaims {
            sub: username.to_string(),
            id: user_id,
            role: role.to_string(),
            exp: exp.timestamp(),
        };

        encode(&self.header, &claims, &self.key).map_err(AuthError::Signing)
    }
}

pub struct TokenVerifier {
    key: DecodingKey,
    validation: Validation,
    clock: Arc<dyn Clock>,
}

impl TokenVerifier {
    pub fn new(config: &JwtConfig, clock: Arc<dyn Clock>) -> Self {
        let mut validation = Validation::new(config.algorithm);
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();
        validation.leeway = 0;

        Self {
            key: DecodingKey::from_secret(config.secret.expose_secret().as_bytes()),
            validation,
            clock,
        }
    }

    pub fn verify(&self, token: &str) -> Result<IdentityContext, AuthError> {
        let claims = decode::<RawClaims>(token, &self.key, &self.validation)
            .map_err(|err| {
                debug!(error = %err, "token failed to decode");
                classify(&err)
            })?
            .claims;

        let Some(exp) = claims.exp else {
            return Err(AuthError::MissingClaims);
        };
        if exp <= self.clock.now().timestamp() {
            return Err(AuthError::Expired);
        }

        match (claims.sub, claims.id) {
            (Some(username), Some(user_id)) => Ok(IdentityContext {
                username,
                user_id,
                user_role: claims.role,
            }),
            _ => Err(AuthError::MissingClaims),
        }
    }
}

fn classify(err: &jsonwebtoken::errors::Error) -> AuthError {
    match err.kind() {
        ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => AuthError::BadSignature,
        _ => AuthError::Malformed,
    }
}
