//! Access token verification against the identity provider's signing keys.

use super::{AccessClaims, AuthError, KeySource, RemoteJwks, normalize_issuer};
use async_trait::async_trait;
use jsonwebtoken::jwk::{Jwk, JwkSet, KeyAlgorithm, PublicKeyUse};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, decode_header};
use std::sync::Arc;

/// Verifies bearer tokens presented on write requests.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    /// Verifies `token` and returns its claims.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidToken`] when the token is malformed,
    /// badly signed, expired, or from another issuer, and
    /// [`AuthError::KeyDiscovery`] when signing keys cannot be resolved.
    async fn verify(&self, token: &str) -> Result<AccessClaims, AuthError>;
}

/// Shared handle to the configured verifier.
pub type SharedTokenVerifier = Arc<dyn TokenVerifier>;

/// JWT verifier backed by a JWK set.
///
/// Checks the signature, that `iss` equals the configured issuer, and that
/// the token has not expired. The audience is not checked. The issuer is
/// compared without trailing slashes. A key that declares an `alg` only
/// verifies tokens signed with that algorithm, and encryption keys are
/// never used.
#[derive(Debug)]
pub struct JwksTokenVerifier {
    issuer: String,
    keys: KeySource,
}

impl JwksTokenVerifier {
    /// Creates a verifier for `issuer` using the given key source.
    #[must_use]
    pub fn new(issuer: impl Into<String>, keys: KeySource) -> Self {
        Self {
            issuer: normalize_issuer(&issuer.into()),
            keys,
        }
    }

    /// Creates a verifier with a fixed key set.
    #[must_use]
    pub fn with_static_keys(issuer: impl Into<String>, keys: JwkSet) -> Self {
        Self::new(issuer, KeySource::Static(Arc::new(keys)))
    }

    /// Creates a verifier that discovers keys from `issuer` via OIDC.
    #[must_use]
    pub fn discover(client: reqwest::Client, issuer: impl Into<String>) -> Self {
        let issuer_uri = normalize_issuer(&issuer.into());
        let remote = RemoteJwks::discover(client, &issuer_uri);
        Self::new(issuer_uri, KeySource::Remote(remote))
    }

    /// Creates a verifier that fetches keys from an explicit JWK-set URI.
    #[must_use]
    pub fn with_jwk_set_uri(
        client: reqwest::Client,
        issuer: impl Into<String>,
        jwks_uri: impl Into<String>,
    ) -> Self {
        Self::new(
            issuer,
            KeySource::Remote(RemoteJwks::from_uri(client, jwks_uri)),
        )
    }

    /// Returns the expected token issuer.
    #[must_use]
    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    fn decode_with(
        &self,
        token: &str,
        algorithm: Algorithm,
        jwk: &Jwk,
    ) -> Result<AccessClaims, AuthError> {
        if matches!(jwk.common.public_key_use, Some(PublicKeyUse::Encryption)) {
            return Err(AuthError::invalid_token("key is not a signing key"));
        }
        let key = DecodingKey::from_jwk(jwk)?;
        let mut validation = Validation::new(algorithm);
        if let Some(declared) = jwk.common.key_algorithm {
            let expected = signing_algorithm(declared)
                .ok_or_else(|| AuthError::invalid_token("key is not a signing key"))?;
            validation.algorithms = vec![expected];
        }
        validation.set_issuer(&[self.issuer.as_str()]);
        validation.validate_aud = false;
        Ok(decode::<AccessClaims>(token, &key, &validation)?.claims)
    }
}

#[async_trait]
impl TokenVerifier for JwksTokenVerifier {
    async fn verify(&self, token: &str) -> Result<AccessClaims, AuthError> {
        let header = decode_header(token)?;
        let kid = header.kid.as_deref();

        let mut keys = self.keys.current(false).await?;
        if candidate_keys(&keys, kid).is_empty() && self.keys.is_refreshable() {
            tracing::debug!(?kid, "no cached key matches token, refreshing key set");
            keys = self.keys.current(true).await?;
        }

        let mut last_error = AuthError::invalid_token("no signing key matches the token");
        for jwk in candidate_keys(&keys, kid) {
            match self.decode_with(token, header.alg, jwk) {
                Ok(claims) => return Ok(claims),
                Err(err) => last_error = err,
            }
        }
        Err(last_error)
    }
}

/// Signature algorithm for a JWK `alg` value; `None` for encryption
/// algorithms.
const fn signing_algorithm(declared: KeyAlgorithm) -> Option<Algorithm> {
    match declared {
        KeyAlgorithm::HS256 => Some(Algorithm::HS256),
        KeyAlgorithm::HS384 => Some(Algorithm::HS384),
        KeyAlgorithm::HS512 => Some(Algorithm::HS512),
        KeyAlgorithm::ES256 => Some(Algorithm::ES256),
        KeyAlgorithm::ES384 => Some(Algorithm::ES384),
        KeyAlgorithm::RS256 => Some(Algorithm::RS256),
        KeyAlgorithm::RS384 => Some(Algorithm::RS384),
        KeyAlgorithm::RS512 => Some(Algorithm::RS512),
        KeyAlgorithm::PS256 => Some(Algorithm::PS256),
        KeyAlgorithm::PS384 => Some(Algorithm::PS384),
        KeyAlgorithm::PS512 => Some(Algorithm::PS512),
        KeyAlgorithm::EdDSA => Some(Algorithm::EdDSA),
        KeyAlgorithm::RSA1_5 | KeyAlgorithm::RSA_OAEP | KeyAlgorithm::RSA_OAEP_256 => None,
    }
}

/// Keys eligible to verify a token: the one named by `kid`, or every key
/// when the token names none.
fn candidate_keys<'a>(keys: &'a JwkSet, kid: Option<&str>) -> Vec<&'a Jwk> {
    match kid {
        Some(id) => keys.find(id).into_iter().collect(),
        None => keys.keys.iter().collect(),
    }
}
