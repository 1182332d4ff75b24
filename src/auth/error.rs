//! Error types for bearer-token authentication.

use std::sync::Arc;
use thiserror::Error;

/// Reasons a write request fails authentication.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// No bearer credential was presented.
    #[error("bearer token is missing")]
    MissingCredentials,

    /// A bearer credential was presented but did not verify.
    #[error("bearer token is invalid: {0}")]
    InvalidToken(String),

    /// Signing keys could not be resolved from the identity provider.
    #[error("signing keys unavailable: {0}")]
    KeyDiscovery(Arc<dyn std::error::Error + Send + Sync>),
}

impl AuthError {
    /// Builds an [`AuthError::InvalidToken`] with the given reason.
    pub fn invalid_token(reason: impl Into<String>) -> Self {
        Self::InvalidToken(reason.into())
    }

    /// Wraps a key discovery or fetch failure.
    pub fn key_discovery(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::KeyDiscovery(Arc::new(err))
    }

    /// Returns `true` when a credential was presented.
    #[must_use]
    pub const fn token_presented(&self) -> bool {
        !matches!(self, Self::MissingCredentials)
    }
}

impl From<jsonwebtoken::errors::Error> for AuthError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        Self::invalid_token(err.to_string())
    }
}
