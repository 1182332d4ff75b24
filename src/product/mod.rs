//! Product catalogue resource.
//!
//! Products carry a required title and an optional description. Two
//! interchangeable stores implement [`ports::ProductRepository`]: an
//! in-memory list and a `PostgreSQL` table whose primary key is generated by
//! the database. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
