//! Authentication and authorization building blocks.
//!
//! - Password hashing (Argon2id)
//! - Stateless bearer tokens (HS256 JWT) with an identity claim and expiry
//! - A request admission gate over the `Authorization` header
//! - A per-resource ownership policy
//!
//! Nothing here touches HTTP frameworks or storage; services adapt these
//! pieces at their own boundaries.
//!
//! # Examples
//!
//! ## Tokens
//! ```
//! use auth::{IdentityClaim, TokenService};
//! use chrono::Duration;
//!
//! let tokens = TokenService::new(b"secret_key_at_least_32_bytes_long!", Duration::minutes(15));
//! let claim = IdentityClaim::new("user123", "alice", "alice@example.com");
//! let token = tokens.issue_default(&claim).unwrap();
//! assert_eq!(tokens.verify(&token).unwrap(), claim);
//! ```
//!
//! ## Gate and ownership
//! ```
//! use std::sync::Arc;
//!
//! use auth::ownership::{authorize, Decision, Operation, Owned};
//! use auth::{AuthGate, IdentityClaim, TokenService};
//! use chrono::Duration;
//!
//! struct Document {
//!     owner: String,
//! }
//!
//! impl Owned for Document {
//!     type OwnerId = String;
//!
//!     fn owner_id(&self) -> &String {
//!         &self.owner
//!     }
//! }
//!
//! let tokens = Arc::new(TokenService::new(
//!     b"secret_key_at_least_32_bytes_long!",
//!     Duration::minutes(15),
//! ));
//! let gate = AuthGate::new(tokens.clone());
//!
//! let token = tokens
//!     .issue_default(&IdentityClaim::new("user123", "alice", "alice@example.com"))
//!     .unwrap();
//! let identity = gate.admit(Some(&format!("Bearer {}", token))).unwrap();
//!
//! let document = Document { owner: "user123".to_string() };
//! assert_eq!(
//!     authorize(&identity.user_id, &document, Operation::Delete),
//!     Decision::Permit
//! );
//! ```

pub mod authenticator;
pub mod clock;
pub mod gate;
pub mod ownership;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use clock::Clock;
pub use clock::SystemClock;
pub use gate::AuthGate;
pub use gate::GateRejection;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::IdentityClaim;
pub use token::TokenError;
pub use token::TokenService;
