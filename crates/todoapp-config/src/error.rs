use thiserror::Error;

/// A configuration fault detected while loading settings at startup.
///
/// These are never per-request errors: the binary refuses to start when
/// any of them is returned.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} is invalid: {reason}")]
    Invalid { key: &'static str, reason: String },
}
