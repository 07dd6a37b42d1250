//! Bearer-token admission.
//!
//! [`AuthGate::admit`] is a single pass over the `Authorization` header: it
//! either yields the identity carried by a valid token or a [`GateRejection`].
//! It knows nothing about resources; ownership is decided downstream by
//! [`crate::ownership`]. HTTP adapters wrap it as middleware on the route
//! groups that require identity.

use std::sync::Arc;

use thiserror::Error;

use crate::token::IdentityClaim;
use crate::token::TokenService;

const BEARER_SCHEME: &str = "Bearer";

/// Reason a request was turned away by the gate.
///
/// Every variant means "unauthorized" to the client; the distinction exists
/// for logging.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GateRejection {
    #[error("Missing Authorization header")]
    MissingCredentials,

    #[error("Authorization header is not of the form 'Bearer <token>'")]
    MalformedCredentials,

    #[error("Bearer token failed verification")]
    InvalidToken,
}

/// Request admission stage backed by a [`TokenService`].
#[derive(Clone)]
pub struct AuthGate {
    tokens: Arc<TokenService>,
}

impl AuthGate {
    pub fn new(tokens: Arc<TokenService>) -> Self {
        Self { tokens }
    }

    /// Admit or reject a request given its `Authorization` header value.
    ///
    /// # Errors
    /// * `MissingCredentials` - No header present
    /// * `MalformedCredentials` - Header is not `Bearer <token>`
    /// * `InvalidToken` - Token signature, encoding or expiry check failed
    pub fn admit(&self, authorization: Option<&str>) -> Result<IdentityClaim, GateRejection> {
        let header = authorization.ok_or(GateRejection::MissingCredentials)?;
        let token = bearer_token(header).ok_or(GateRejection::MalformedCredentials)?;

        self.tokens
            .verify(token)
            .map_err(|_| GateRejection::InvalidToken)
    }
}

/// Extract the token from a `Bearer <token>` header value.
///
/// The scheme is matched case-insensitively. Exactly one non-empty token
/// must follow a single space.
pub fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
        return None;
    }

    if token.is_empty() || token.contains(char::is_whitespace) {
        return None;
    }

    Some(token)
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn gate() -> (AuthGate, Arc<TokenService>) {
        let tokens = Arc::new(TokenService::new(
            b"gate_test_secret_at_least_32_bytes!",
            Duration::minutes(15),
        ));
        (AuthGate::new(tokens.clone()), tokens)
    }

    #[test]
    fn test_bearer_token_shapes() {
        assert_eq!(bearer_token("Bearer abc.def.ghi"), Some("abc.def.ghi"));
        assert_eq!(bearer_token("bearer abc"), Some("abc"));

        assert_eq!(bearer_token("Bearer"), None);
        assert_eq!(bearer_token("Bearer "), None);
        assert_eq!(bearer_token("Basic xyz"), None);
        assert_eq!(bearer_token("Bearer a b"), None);
        assert_eq!(bearer_token("Bearer  abc"), None);
        assert_eq!(bearer_token("Bearerabc"), None);
        assert_eq!(bearer_token(""), None);
    }

    #[test]
    fn test_admit_missing_header() {
        let (gate, _) = gate();
        assert_eq!(gate.admit(None), Err(GateRejection::MissingCredentials));
    }

    #[test]
    fn test_admit_wrong_scheme() {
        let (gate, _) = gate();
        assert_eq!(
            gate.admit(Some("Basic xyz")),
            Err(GateRejection::MalformedCredentials)
        );
    }

    #[test]
    fn test_admit_garbage_token() {
        let (gate, _) = gate();
        assert_eq!(
            gate.admit(Some("Bearer garbage")),
            Err(GateRejection::InvalidToken)
        );
    }

    #[test]
    fn test_admit_valid_token() {
        let (gate, tokens) = gate();
        let claim = IdentityClaim::new("user123", "alice", "alice@example.com");
        let token = tokens.issue_default(&claim).unwrap();

        let admitted = gate
            .admit(Some(&format!("Bearer {}", token)))
            .expect("Valid token rejected");

        assert_eq!(admitted, claim);
    }
}
