//! HTTP error mapping.

use crate::auth::AuthError;
use crate::message::services::MessageBoardError;
use crate::product::services::ProductCatalogueError;
use crate::validation::{FieldViolation, ValidationErrors};
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::{HeaderValue, StatusCode, header::WWW_AUTHENTICATE};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

const INTERNAL_MESSAGE: &str = "an unexpected error occurred";

/// Failures surfaced to HTTP clients.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The payload parsed but failed field validation.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// The payload is not valid JSON for the resource.
    #[error("malformed request body: {0}")]
    BadRequest(String),

    /// The payload was not declared as JSON.
    #[error("{0}")]
    UnsupportedMediaType(String),

    /// The request carried no valid bearer token.
    #[error(transparent)]
    Unauthorized(#[from] AuthError),

    /// A storage or runtime fault. Details are logged, never returned.
    #[error("internal error: {0}")]
    Internal(Arc<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
    /// Wraps an unexpected failure.
    pub fn internal(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Internal(Arc::new(err))
    }

    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn public_message(&self) -> String {
        match self {
            Self::Internal(_) => INTERNAL_MESSAGE.to_owned(),
            Self::Unauthorized(AuthError::KeyDiscovery(_)) => {
                "bearer token could not be verified".to_owned()
            }
            other => other.to_string(),
        }
    }

    fn log(&self) {
        match self {
            Self::Internal(err) => tracing::error!(error = %err, "request failed"),
            Self::Unauthorized(err @ AuthError::KeyDiscovery(_)) => {
                tracing::error!(error = %err, "token verification unavailable");
            }
            Self::Unauthorized(err) => tracing::debug!(error = %err, "request rejected"),
            Self::Validation(_) | Self::BadRequest(_) | Self::UnsupportedMediaType(_) => {}
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(err) => Self::UnsupportedMediaType(err.body_text()),
            other => Self::BadRequest(other.body_text()),
        }
    }
}

impl From<MessageBoardError> for ApiError {
    fn from(err: MessageBoardError) -> Self {
        match err {
            MessageBoardError::Validation(errors) => Self::Validation(errors),
            MessageBoardError::Repository(source) => Self::internal(source),
        }
    }
}

impl From<ProductCatalogueError> for ApiError {
    fn from(err: ProductCatalogueError) -> Self {
        match err {
            ProductCatalogueError::Validation(errors) => Self::Validation(errors),
            ProductCatalogueError::Repository(source) => Self::internal(source),
        }
    }
}

/// JSON error payload.
#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    status: u16,
    error: &'static str,
    message: String,
    #[serde(skip_serializing_if = "<[FieldViolation]>::is_empty")]
    violations: &'a [FieldViolation],
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.log();
        let status = self.status();
        let violations = match &self {
            Self::Validation(errors) => errors.violations(),
            _ => &[],
        };
        let body = ErrorBody {
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or_default(),
            message: self.public_message(),
            violations,
        };
        let mut response = (status, Json(body)).into_response();

        if let Self::Unauthorized(err) = &self {
            let challenge = if err.token_presented() {
                HeaderValue::from_static(r#"Bearer error="invalid_token""#)
            } else {
                HeaderValue::from_static("Bearer")
            };
            response.headers_mut().insert(WWW_AUTHENTICATE, challenge);
        }
        response
    }
}
