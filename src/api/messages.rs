//! `/api/messages` handlers.

use super::{ApiError, AppState, Authenticated};
use crate::message::domain::{CreateMessageRequest, Message};
use axum::Json;
use axum::extract::{State, rejection::JsonRejection};
use axum::http::StatusCode;

/// `GET /api/messages`: every message in creation order.
///
/// # Errors
///
/// Returns [`ApiError::Internal`] when the store fails.
pub async fn list_messages(State(state): State<AppState>) -> Result<Json<Vec<Message>>, ApiError> {
    Ok(Json(state.messages().list_all().await?))
}

/// `POST /api/messages`: stores a message and returns it with its id.
///
/// # Errors
///
/// Returns [`ApiError::Unauthorized`] without a valid bearer token,
/// [`ApiError::Validation`] for empty fields, or a body error when the
/// payload is not JSON.
pub async fn create_message(
    State(state): State<AppState>,
    Authenticated(caller): Authenticated,
    payload: Result<Json<CreateMessageRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Message>), ApiError> {
    let Json(request) = payload?;
    tracing::debug!(caller = ?caller.sub, "creating message");
    let message = state.messages().create(request).await?;
    Ok((StatusCode::CREATED, Json(message)))
}
