//! Bearer-token authentication for write requests.
//!
//! Tokens are JWTs issued by an OAuth2 identity provider. They are checked
//! against the provider's JWK set for signature, issuer, and expiry. Reads
//! are never authenticated.

mod bearer;
mod claims;
mod error;
mod jwks;
mod verifier;

pub use bearer::bearer_token;
pub use claims::AccessClaims;
pub use error::AuthError;
pub use jwks::{DEFAULT_REFRESH_COOLDOWN, KeySource, RemoteJwks, discovery_url, normalize_issuer};
pub use verifier::{JwksTokenVerifier, SharedTokenVerifier, TokenVerifier};
