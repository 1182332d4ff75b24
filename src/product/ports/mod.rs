//! Port contracts for product storage.

pub mod repository;

pub use repository::{ProductRepository, ProductRepositoryError, ProductRepositoryResult};
