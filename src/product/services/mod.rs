//! Application services for products.

mod catalogue;

pub use catalogue::{ProductCatalogueError, ProductCatalogueResult, ProductCatalogueService};
