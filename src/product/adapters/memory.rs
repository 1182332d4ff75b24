//! In-memory product repository.

use async_trait::async_trait;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, RwLock};

use crate::product::{
    domain::{NewProduct, Product, ProductId},
    ports::{ProductRepository, ProductRepositoryError, ProductRepositoryResult},
};

/// Thread-safe in-memory product repository.
///
/// Clones share the same underlying store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductRepository {
    state: Arc<InMemoryProductState>,
}

#[derive(Debug, Default)]
struct InMemoryProductState {
    products: RwLock<Vec<Product>>,
    last_id: AtomicI64,
}

impl InMemoryProductRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list_all(&self) -> ProductRepositoryResult<Vec<Product>> {
        let products = self.state.products.read().map_err(|err| {
            ProductRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(products.clone())
    }

    async fn create(&self, product: NewProduct) -> ProductRepositoryResult<Product> {
        let mut products = self.state.products.write().map_err(|err| {
            ProductRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let id = ProductId::new(self.state.last_id.fetch_add(1, Ordering::SeqCst) + 1);
        let stored = product.into_product(id);
        products.push(stored.clone());
        Ok(stored)
    }
}
