use serde::Deserialize;
use serde::Serialize;

/// Identity carried inside a bearer token.
///
/// Derived from a user record at login time and never persisted on its own.
/// Its lifetime is bounded by the expiry of the token that carries it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IdentityClaim {
    /// Opaque user identifier
    #[serde(rename = "id")]
    pub user_id: String,

    pub username: String,

    pub email: String,
}

impl IdentityClaim {
    /// Create a new identity claim.
    pub fn new(
        user_id: impl ToString,
        username: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.to_string(),
            username: username.into(),
            email: email.into(),
        }
    }
}

/// Signed token payload.
///
/// The identity sits under a `user` key; `iat` and `exp` are Unix timestamps
/// in seconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenClaims {
    pub user: IdentityClaim,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl TokenClaims {
    /// Check whether the token is expired at `current_timestamp`.
    ///
    /// A token stops being valid at its expiry instant, so `exp` itself
    /// already counts as expired.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        current_timestamp >= self.exp
    }
}
