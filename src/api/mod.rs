//! HTTP surface.
//!
//! | Method | Path            | Auth   |
//! |--------|-----------------|--------|
//! | GET    | `/api/messages` | none   |
//! | POST   | `/api/messages` | bearer |
//! | GET    | `/api/products` | none   |
//! | POST   | `/api/products` | bearer |

mod error;
mod extract;
pub mod messages;
pub mod products;
mod state;

pub use error::ApiError;
pub use extract::Authenticated;
pub use state::{AppState, MessageBoard, ProductCatalogue};

use axum::Router;
use axum::routing::get;

/// Builds the application router over `state`.
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/messages",
            get(messages::list_messages).post(messages::create_message),
        )
        .route(
            "/api/products",
            get(products::list_products).post(products::create_product),
        )
        .with_state(state)
}
