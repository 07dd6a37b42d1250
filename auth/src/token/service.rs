use std::sync::Arc;

use chrono::Duration;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::IdentityClaim;
use super::claims::TokenClaims;
use super::errors::TokenError;
use crate::clock::Clock;
use crate::clock::SystemClock;

/// Issues and verifies signed, time-limited bearer tokens.
///
/// Tokens are HS256 JWTs carrying an [`IdentityClaim`] plus `iat`/`exp`.
/// Nothing is stored server-side: a token is valid if and only if its
/// signature verifies against the secret and the current time is before
/// its expiry. Issuance and verification read the same [`Clock`].
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    validation: Validation,
    default_ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl TokenService {
    /// Create a token service signing with `secret`.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens
    /// * `default_ttl` - Lifetime applied by [`TokenService::issue_default`]
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Load it from configuration once at startup and pass it in here
    pub fn new(secret: &[u8], default_ttl: Duration) -> Self {
        let algorithm = Algorithm::HS256;

        // Expiry is checked against the injected clock with zero leeway, so
        // the library's own wall-clock check is turned off.
        let mut validation = Validation::new(algorithm);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm,
            validation,
            default_ttl,
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the clock used for `iat`, `exp` and expiry checks.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Sign `claim` into a token expiring `ttl` from now.
    ///
    /// # Errors
    /// * `Signing` - Token encoding failed
    pub fn issue(&self, claim: &IdentityClaim, ttl: Duration) -> Result<String, TokenError> {
        let issued_at = self.clock.now().timestamp();
        let claims = TokenClaims {
            user: claim.clone(),
            iat: issued_at,
            exp: issued_at + ttl.num_seconds(),
        };

        encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Sign `claim` with the default TTL.
    ///
    /// # Errors
    /// * `Signing` - Token encoding failed
    pub fn issue_default(&self, claim: &IdentityClaim) -> Result<String, TokenError> {
        self.issue(claim, self.default_ttl)
    }

    /// Verify a token and recover the identity it carries.
    ///
    /// # Errors
    /// * `Invalid` - Signature mismatch, malformed token, missing `exp`, or
    ///   the current time is at or past `exp`
    pub fn verify(&self, token: &str) -> Result<IdentityClaim, TokenError> {
        let token_data = decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                tracing::debug!(error = %e, "Token failed verification");
                TokenError::Invalid
            })?;

        let now = self.clock.now().timestamp();
        if token_data.claims.is_expired(now) {
            tracing::debug!(exp = token_data.claims.exp, now, "Token expired");
            return Err(TokenError::Invalid);
        }

        Ok(token_data.claims.user)
    }
}
