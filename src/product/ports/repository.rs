//! Repository port for product storage.

use crate::product::domain::{NewProduct, Product};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for product repository operations.
pub type ProductRepositoryResult<T> = Result<T, ProductRepositoryError>;

/// Product storage contract.
///
/// Implemented by the in-memory store and the `PostgreSQL` store; which one
/// backs the service is decided once at startup.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Returns a snapshot of every stored product in creation order.
    async fn list_all(&self) -> ProductRepositoryResult<Vec<Product>>;

    /// Stores `product` under a newly generated key and returns the stored
    /// entity.
    ///
    /// # Errors
    ///
    /// Returns [`ProductRepositoryError::Persistence`] on storage faults
    /// such as lost connectivity or a constraint violation.
    async fn create(&self, product: NewProduct) -> ProductRepositoryResult<Product>;
}

/// Errors returned by product repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ProductRepositoryError {
    /// Storage-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ProductRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
