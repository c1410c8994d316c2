use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use todoapp_auth::IdentityContext;
use tracing::debug;

use crate::state::AppState;
use crate::utils::errors::AppError;

/// Extractor that validates the bearer token and provides the caller's identity.
#[derive(Debug, Clone)]
pub struct AuthUser(pub IdentityContext);

impl AuthUser {
    pub fn user_id(&self) -> i64 {
        self.0.user_id
    }
}

fn bearer_token(parts: &Parts) -> Option<&str> {
    let value = parts.headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    scheme
        .eq_ignore_ascii_case("bearer")
        .then_some(token.trim())
        .filter(|token| !token.is_empty())
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(token) = bearer_token(parts) else {
            debug!("missing or non-bearer authorization header");
            return Err(AppError::unauthorized());
        };

        let identity = state.authority.verify(token)?;

        Ok(AuthUser(identity))
    }
}
