use thiserror::Error;

/// Error type for token operations.
///
/// Callers must not surface the distinction between `Expired` and
/// `Invalid` to clients; it exists for server-side logging only.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is expired")]
    Expired,

    #[error("Token is invalid: {0}")]
    Invalid(String),
}
