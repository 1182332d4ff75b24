//! Shared application state handed to every handler.

use crate::auth::SharedTokenVerifier;
use crate::message::{ports::MessageRepository, services::MessageBoardService};
use crate::product::{ports::ProductRepository, services::ProductCatalogueService};
use axum::extract::FromRef;
use mockable::DefaultClock;
use std::sync::Arc;

/// Message service as wired into the HTTP layer.
pub type MessageBoard = MessageBoardService<dyn MessageRepository, DefaultClock>;

/// Product service as wired into the HTTP layer.
pub type ProductCatalogue = ProductCatalogueService<dyn ProductRepository>;

/// Services and collaborators built once at startup.
///
/// Cloning is cheap; every field is reference counted.
#[derive(Clone)]
pub struct AppState {
    messages: MessageBoard,
    products: ProductCatalogue,
    verifier: SharedTokenVerifier,
}

impl AppState {
    /// Wires the given stores and verifier into application state.
    #[must_use]
    pub fn new(
        messages: Arc<dyn MessageRepository>,
        products: Arc<dyn ProductRepository>,
        verifier: SharedTokenVerifier,
    ) -> Self {
        Self {
            messages: MessageBoardService::new(messages, Arc::new(DefaultClock)),
            products: ProductCatalogueService::new(products),
            verifier,
        }
    }

    /// Returns the message service.
    #[must_use]
    pub const fn messages(&self) -> &MessageBoard {
        &self.messages
    }

    /// Returns the product service.
    #[must_use]
    pub const fn products(&self) -> &ProductCatalogue {
        &self.products
    }
}

impl FromRef<AppState> for SharedTokenVerifier {
    fn from_ref(state: &AppState) -> Self {
        Arc::clone(&state.verifier)
    }
}
