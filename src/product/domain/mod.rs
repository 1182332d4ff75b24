//! Domain model for products.

mod ids;
mod product;

pub use ids::ProductId;
pub use product::{CreateProductRequest, NewProduct, Product};
