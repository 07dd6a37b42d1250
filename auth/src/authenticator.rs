use std::sync::Arc;

use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::token::IdentityClaim;
use crate::token::TokenError;
use crate::token::TokenService;

/// Authentication coordinator combining password verification and token
/// issuance.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    tokens: Arc<TokenService>,
    // Verified against when no account exists, at the same work factor.
    decoy_hash: String,
}

/// Result of successful authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticationResult {
    /// Signed bearer token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("Token error: {0}")]
    TokenError(#[from] TokenError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `password_hasher` - Hasher used for registration and login
    /// * `tokens` - Token service shared with the request gate
    ///
    /// # Errors
    /// * `PasswordError` - The decoy hash could not be computed
    pub fn new(
        password_hasher: PasswordHasher,
        tokens: Arc<TokenService>,
    ) -> Result<Self, PasswordError> {
        let decoy_hash = password_hasher.hash("decoy-password-for-unknown-accounts")?;

        Ok(Self {
            password_hasher,
            tokens,
            decoy_hash,
        })
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and issue a token for `claim`.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `claim` - Identity to embed in the token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Stored hash could not be parsed
    /// * `TokenError` - Token signing failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        claim: &IdentityClaim,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        let is_valid = self.password_hasher.verify(password, stored_hash)?;

        if !is_valid {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.tokens.issue_default(claim)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Reject a login for an account that does not exist.
    ///
    /// Runs a full verification against the decoy hash so the rejection
    /// costs the same as a wrong password for a real account.
    pub fn reject_unknown_account(&self, password: &str) -> AuthenticationError {
        if let Err(e) = self.password_hasher.verify(password, &self.decoy_hash) {
            tracing::warn!(error = %e, "Decoy hash verification failed");
        }
        AuthenticationError::InvalidCredentials
    }
}
