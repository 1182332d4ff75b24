//! Service layer for listing and creating products.

use crate::product::{
    domain::{CreateProductRequest, Product},
    ports::{ProductRepository, ProductRepositoryError},
};
use crate::validation::ValidationErrors;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for product operations.
#[derive(Debug, Error)]
pub enum ProductCatalogueError {
    /// The request failed field validation; nothing was stored.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] ProductRepositoryError),
}

/// Result type for product service operations.
pub type ProductCatalogueResult<T> = Result<T, ProductCatalogueError>;

/// Product orchestration service.
///
/// `R` may be unsized so the store can be chosen at startup and held as
/// `Arc<dyn ProductRepository>`.
pub struct ProductCatalogueService<R>
where
    R: ProductRepository + ?Sized,
{
    repository: Arc<R>,
}

impl<R> Clone for ProductCatalogueService<R>
where
    R: ProductRepository + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R> ProductCatalogueService<R>
where
    R: ProductRepository + ?Sized,
{
    /// Creates a new product service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns every product in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`ProductCatalogueError::Repository`] when the store fails.
    pub async fn list_all(&self) -> ProductCatalogueResult<Vec<Product>> {
        Ok(self.repository.list_all().await?)
    }

    /// Validates `request` and stores the resulting product.
    ///
    /// # Errors
    ///
    /// Returns [`ProductCatalogueError::Validation`] before touching the
    /// store when the title is empty, or
    /// [`ProductCatalogueError::Repository`] when the store rejects the write.
    pub async fn create(&self, request: CreateProductRequest) -> ProductCatalogueResult<Product> {
        let draft = request.validate()?;
        let product = self.repository.create(draft).await?;
        tracing::info!(product_id = %product.id(), title = product.title(), "product created");
        Ok(product)
    }
}
