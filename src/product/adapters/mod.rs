//! Adapter implementations for product storage.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryProductRepository;
pub use postgres::PostgresProductRepository;
