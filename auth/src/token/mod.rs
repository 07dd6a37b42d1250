pub mod claims;
pub mod errors;
pub mod service;

pub use claims::IdentityClaim;
pub use claims::TokenClaims;
pub use errors::TokenError;
pub use service::TokenService;
