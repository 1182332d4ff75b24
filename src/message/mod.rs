//! Message board resource.
//!
//! Messages are posted with a body and an author, stamped with a server-side
//! creation time, and listed in the order they were created. Storage is
//! in-memory only. The module follows hexagonal architecture:
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
