//! Signing key resolution for token verification.
//!
//! Keys come either from a pre-loaded JWK set or from the identity provider.
//! Remote keys are located through OpenID Connect discovery
//! (`<issuer>/.well-known/openid-configuration`) unless an explicit JWK-set
//! URI is configured, then cached. A forced refresh is honoured at most once
//! per cooldown window, and concurrent refreshes share one fetch.

use super::AuthError;
use jsonwebtoken::jwk::JwkSet;
use serde::Deserialize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

const DISCOVERY_PATH: &str = "/.well-known/openid-configuration";

/// Minimum time between two fetches of the remote key set.
pub const DEFAULT_REFRESH_COOLDOWN: Duration = Duration::from_secs(30);

/// Where verification keys come from.
#[derive(Debug)]
pub enum KeySource {
    /// A fixed key set supplied at construction.
    Static(Arc<JwkSet>),
    /// Keys fetched from the identity provider over HTTP.
    Remote(RemoteJwks),
}

impl KeySource {
    /// Returns the current key set. Remote keys are fetched when nothing is
    /// cached yet, or when `refresh` is set and the cooldown has elapsed.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::KeyDiscovery`] when remote keys cannot be
    /// fetched.
    pub async fn current(&self, refresh: bool) -> Result<Arc<JwkSet>, AuthError> {
        match self {
            Self::Static(keys) => Ok(Arc::clone(keys)),
            Self::Remote(remote) => remote.current(refresh).await,
        }
    }

    /// Returns `true` when a refresh can yield different keys.
    #[must_use]
    pub const fn is_refreshable(&self) -> bool {
        matches!(self, Self::Remote(_))
    }
}

#[derive(Debug, Clone)]
enum JwksLocation {
    Discovery { issuer: String },
    Direct(String),
}

/// OIDC provider metadata fields needed to locate the key set.
#[derive(Debug, Deserialize)]
struct ProviderMetadata {
    issuer: String,
    jwks_uri: String,
}

#[derive(Debug)]
struct CachedKeys {
    keys: Arc<JwkSet>,
    fetched_at: Instant,
}

/// JWK set fetched from the identity provider and cached in memory.
#[derive(Debug)]
pub struct RemoteJwks {
    client: reqwest::Client,
    location: JwksLocation,
    refresh_cooldown: Duration,
    cached: RwLock<Option<CachedKeys>>,
}

impl RemoteJwks {
    /// Resolves the key set via OIDC discovery on `issuer`.
    #[must_use]
    pub fn discover(client: reqwest::Client, issuer: &str) -> Self {
        Self::with_location(
            client,
            JwksLocation::Discovery {
                issuer: normalize_issuer(issuer),
            },
        )
    }

    /// Fetches the key set from an explicit JWK-set URI.
    #[must_use]
    pub fn from_uri(client: reqwest::Client, jwks_uri: impl Into<String>) -> Self {
        Self::with_location(client, JwksLocation::Direct(jwks_uri.into()))
    }

    /// Overrides [`DEFAULT_REFRESH_COOLDOWN`].
    #[must_use]
    pub const fn with_refresh_cooldown(mut self, cooldown: Duration) -> Self {
        self.refresh_cooldown = cooldown;
        self
    }

    fn with_location(client: reqwest::Client, location: JwksLocation) -> Self {
        Self {
            client,
            location,
            refresh_cooldown: DEFAULT_REFRESH_COOLDOWN,
            cached: RwLock::new(None),
        }
    }

    async fn current(&self, refresh: bool) -> Result<Arc<JwkSet>, AuthError> {
        if let Some(keys) = self.usable(self.cached.read().await.as_ref(), refresh) {
            return Ok(keys);
        }

        // Held across the fetch so concurrent callers wait for one refresh
        // and then find it in the cache.
        let mut cached = self.cached.write().await;
        if let Some(keys) = self.usable(cached.as_ref(), refresh) {
            return Ok(keys);
        }

        let fetched = Arc::new(self.fetch().await?);
        *cached = Some(CachedKeys {
            keys: Arc::clone(&fetched),
            fetched_at: Instant::now(),
        });
        Ok(fetched)
    }

    fn usable(&self, cached: Option<&CachedKeys>, refresh: bool) -> Option<Arc<JwkSet>> {
        let entry = cached?;
        let within_cooldown = entry.fetched_at.elapsed() < self.refresh_cooldown;
        if refresh && !within_cooldown {
            return None;
        }
        if refresh {
            tracing::debug!("key set refresh suppressed during cooldown");
        }
        Some(Arc::clone(&entry.keys))
    }

    async fn fetch(&self) -> Result<JwkSet, AuthError> {
        let jwks_uri = match &self.location {
            JwksLocation::Direct(uri) => uri.clone(),
            JwksLocation::Discovery { issuer } => self.discover_jwks_uri(issuer).await?,
        };

        let keys = self
            .client
            .get(&jwks_uri)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(AuthError::key_discovery)?
            .json::<JwkSet>()
            .await
            .map_err(AuthError::key_discovery)?;

        tracing::debug!(%jwks_uri, key_count = keys.keys.len(), "fetched signing keys");
        Ok(keys)
    }

    async fn discover_jwks_uri(&self, issuer: &str) -> Result<String, AuthError> {
        let url = discovery_url(issuer);
        let metadata = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(AuthError::key_discovery)?
            .json::<ProviderMetadata>()
            .await
            .map_err(AuthError::key_discovery)?;

        if normalize_issuer(&metadata.issuer) != issuer {
            return Err(AuthError::key_discovery(std::io::Error::other(format!(
                "discovery document issuer '{}' does not match '{issuer}'",
                metadata.issuer
            ))));
        }
        Ok(metadata.jwks_uri)
    }
}

/// Strips trailing slashes so configured and advertised issuers compare
/// equal.
#[must_use]
pub fn normalize_issuer(issuer: &str) -> String {
    issuer.trim_end_matches('/').to_owned()
}

/// Builds the OIDC discovery URL for `issuer`.
#[must_use]
pub fn discovery_url(issuer: &str) -> String {
    format!("{}{DISCOVERY_PATH}", normalize_issuer(issuer))
}
