//! Claims carried by verified access tokens.

use serde::{Deserialize, Serialize};

/// Registered and common claims read from a verified access token.
///
/// Only `iss` and `exp` are required; the rest are informational.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Token issuer; must equal the configured issuer URI.
    pub iss: String,
    /// Expiry as seconds since the Unix epoch.
    pub exp: u64,
    /// Subject the token was issued to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    /// Authorised party (OAuth2 client id).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub azp: Option<String>,
    /// Space-separated granted scopes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}
