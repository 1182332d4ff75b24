//! Storefront: message board and product catalogue REST service.
//!
//! Two resources are exposed over HTTP. Messages live in memory only.
//! Products live either in memory or in a `PostgreSQL` table, chosen at
//! startup. Reads are public; writes require a bearer token issued by the
//! configured OAuth2 identity provider.
//!
//! # Architecture
//!
//! Each resource follows hexagonal architecture principles:
//!
//! - **Domain**: Request validation and entities with no infrastructure
//!   dependencies
//! - **Ports**: Async repository traits
//! - **Adapters**: In-memory and `PostgreSQL` implementations of the ports
//! - **Services**: Validation followed by storage
//!
//! # Modules
//!
//! - [`message`]: Message board resource
//! - [`product`]: Product catalogue resource
//! - [`auth`]: Bearer-token verification against a JWK set
//! - [`api`]: `axum` router, handlers and error mapping
//! - [`config`]: Command-line and environment configuration

pub mod api;
pub mod auth;
pub mod config;
pub mod message;
pub mod product;
pub mod telemetry;
pub mod validation;

#[cfg(test)]
mod test_support;
