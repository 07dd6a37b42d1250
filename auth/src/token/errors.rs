use thiserror::Error;

/// Error type for token operations.
///
/// Verification collapses every failure (bad signature, malformed encoding,
/// expiry) into `Invalid` so callers cannot tell which check rejected a token.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token is invalid")]
    Invalid,

    #[error("Failed to sign token: {0}")]
    Signing(String),
}
