use thiserror::Error;

/// Every way authentication can fail.
///
/// The first five variants are authentication outcomes. Callers facing a
/// client must collapse them into one "unauthorized" response; they stay
/// distinct here for logging and tests. `PasswordTooLong` is a client input
/// error raised only when hashing a new password. The remaining variants are
/// internal faults that must surface as server errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown username or wrong password. Both cases are reported the same.
    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("token is malformed")]
    Malformed,

    #[error("token signature does not verify")]
    BadSignature,

    #[error("token has expired")]
    Expired,

    /// `sub` or `id` (or `exp`) absent or null.
    #[error("token is missing required claims")]
    MissingClaims,

    /// bcrypt only reads the first 72 bytes of its input.
    #[error("password must be at most {max} bytes")]
    PasswordTooLong { max: usize },

    #[error("password hashing failed: {0}")]
    Hashing(#[from] bcrypt::BcryptError),

    #[error("token signing failed: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),

    #[error("credential lookup failed: {0}")]
    Store(#[source] anyhow::Error),

    #[error("token expiry is out of range")]
    ExpiryOutOfRange,
}

impl AuthError {
    /// True for outcomes the client should see as a plain 401.
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials
                | Self::Malformed
                | Self::BadSignature
                | Self::Expired
                | Self::MissingClaims
        )
    }

    /// Stable identifier for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "invalid_credentials",
            Self::Malformed => "malformed",
            Self::BadSignature => "bad_signature",
            Self::Expired => "expired",
            Self::MissingClaims => "missing_claims",
            Self::PasswordTooLong { .. } => "password_too_long",
            Self::Hashing(_) => "hashing",
            Self::Signing(_) => "signing",
            Self::Store(_) => "store",
            Self::ExpiryOutOfRange => "expiry_out_of_range",
        }
    }
}
