//! Request extractors.

use super::ApiError;
use crate::auth::{AccessClaims, SharedTokenVerifier, bearer_token};
use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;

/// Claims of a caller whose bearer token verified.
///
/// Runs before the body extractor, so a rejected request never reaches
/// validation or storage.
#[derive(Debug, Clone)]
pub struct Authenticated(pub AccessClaims);

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
    SharedTokenVerifier: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let verifier = SharedTokenVerifier::from_ref(state);
        let token = bearer_token(&parts.headers)?;
        let claims = verifier.verify(token).await?;
        Ok(Self(claims))
    }
}
