//! `PostgreSQL` repository implementation for product storage.

use super::{
    models::{NewProductRow, ProductRow},
    schema::products,
};
use crate::product::{
    domain::{NewProduct, Product, ProductId},
    ports::{ProductRepository, ProductRepositoryError, ProductRepositoryResult},
};
use async_trait::async_trait;
use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by product adapters.
pub type ProductPgPool = Pool<ConnectionManager<PgConnection>>;

/// Idempotent DDL for the `products` table.
pub const PRODUCTS_SCHEMA_SQL: &str =
    include_str!("../../../../migrations/2026-10-19-000000_create_products/up.sql");

/// `PostgreSQL`-backed product repository.
#[derive(Debug, Clone)]
pub struct PostgresProductRepository {
    pool: ProductPgPool,
}

impl PostgresProductRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: ProductPgPool) -> Self {
        Self { pool }
    }

    /// Creates the `products` table when it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`ProductRepositoryError::Persistence`] when no connection can
    /// be obtained or the DDL fails.
    pub async fn ensure_schema(&self) -> ProductRepositoryResult<()> {
        self.run_blocking(|connection| {
            connection
                .batch_execute(PRODUCTS_SCHEMA_SQL)
                .map_err(ProductRepositoryError::persistence)
        })
        .await
    }

    async fn run_blocking<F, T>(&self, f: F) -> ProductRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> ProductRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(ProductRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(ProductRepositoryError::persistence)?
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn list_all(&self) -> ProductRepositoryResult<Vec<Product>> {
        self.run_blocking(move |connection| {
            let rows = products::table
                .order(products::id.asc())
                .select(ProductRow::as_select())
                .load::<ProductRow>(connection)
                .map_err(ProductRepositoryError::persistence)?;
            Ok(rows.into_iter().map(row_to_product).collect())
        })
        .await
    }

    async fn create(&self, product: NewProduct) -> ProductRepositoryResult<Product> {
        let new_row = to_new_row(&product);

        self.run_blocking(move |connection| {
            let row = diesel::insert_into(products::table)
                .values(&new_row)
                .returning(ProductRow::as_returning())
                .get_result::<ProductRow>(connection)
                .map_err(ProductRepositoryError::persistence)?;
            Ok(row_to_product(row))
        })
        .await
    }
}

fn to_new_row(product: &NewProduct) -> NewProductRow {
    NewProductRow {
        title: product.title().to_owned(),
        description: product.description().map(ToOwned::to_owned),
    }
}

/// Rows are trusted as stored; the table's `CHECK` constraint keeps titles
/// non-empty.
fn row_to_product(row: ProductRow) -> Product {
    let ProductRow {
        id,
        title,
        description,
    } = row;
    Product::from_stored(ProductId::new(id), title, description)
}
