//! `/api/products` handlers.

use super::{ApiError, AppState, Authenticated};
use crate::product::domain::{CreateProductRequest, Product};
use axum::Json;
use axum::extract::{State, rejection::JsonRejection};
use axum::http::StatusCode;

/// `GET /api/products`: every product in storage order.
///
/// # Errors
///
/// Returns [`ApiError::Internal`] when the store fails.
pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>, ApiError> {
    Ok(Json(state.products().list_all().await?))
}

/// `POST /api/products`: stores a product and returns it with its id.
///
/// # Errors
///
/// Returns [`ApiError::Unauthorized`] without a valid bearer token,
/// [`ApiError::Validation`] for an empty title, or a body error when the
/// payload is not JSON.
pub async fn create_product(
    State(state): State<AppState>,
    Authenticated(caller): Authenticated,
    payload: Result<Json<CreateProductRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let Json(request) = payload?;
    tracing::debug!(caller = ?caller.sub, "creating product");
    let product = state.products().create(request).await?;
    Ok((StatusCode::CREATED, Json(product)))
}
