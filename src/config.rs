//! Runtime configuration.
//!
//! Every setting is a command-line flag that falls back to an environment
//! variable; `main` loads `.env` before parsing.

use clap::{Parser, ValueEnum};
use std::net::SocketAddr;
use thiserror::Error;

/// Product storage backends selectable at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ProductStoreKind {
    /// Process-local list; contents are lost on restart.
    #[default]
    Memory,
    /// `PostgreSQL` table.
    Postgres,
}

/// Resolved product storage settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductStorage {
    /// In-memory store.
    Memory,
    /// `PostgreSQL` store.
    Postgres {
        /// Connection URL.
        database_url: String,
        /// Maximum pooled connections.
        pool_size: u32,
    },
}

/// Invalid combinations of configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `postgres` storage was selected without a database URL.
    #[error("DATABASE_URL is required when the product store is 'postgres'")]
    MissingDatabaseUrl,
}

/// Storefront service configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "storefront", version, about = "Message board and product catalogue REST service")]
pub struct AppConfig {
    /// Address the HTTP server listens on.
    #[arg(long, env = "STOREFRONT_BIND_ADDR", default_value = "0.0.0.0:8080")]
    pub bind_addr: SocketAddr,

    /// OAuth2 issuer whose tokens authorise writes.
    #[arg(long, env = "OAUTH2_ISSUER_URI")]
    pub issuer_uri: String,

    /// JWK-set URI; discovered from the issuer when omitted.
    #[arg(long, env = "OAUTH2_JWK_SET_URI")]
    pub jwk_set_uri: Option<String>,

    /// Product storage backend.
    #[arg(long, env = "STOREFRONT_PRODUCT_STORE", value_enum, default_value_t)]
    pub product_store: ProductStoreKind,

    /// `PostgreSQL` connection URL.
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum pooled database connections.
    #[arg(long, env = "DATABASE_POOL_SIZE", default_value_t = 10)]
    pub database_pool_size: u32,
}

impl AppConfig {
    /// Resolves the product storage choice.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingDatabaseUrl`] when `postgres` is
    /// selected without a database URL.
    pub fn product_storage(&self) -> Result<ProductStorage, ConfigError> {
        match self.product_store {
            ProductStoreKind::Memory => Ok(ProductStorage::Memory),
            ProductStoreKind::Postgres => {
                let database_url = self
                    .database_url
                    .clone()
                    .ok_or(ConfigError::MissingDatabaseUrl)?;
                Ok(ProductStorage::Postgres {
                    database_url,
                    pool_size: self.database_pool_size,
                })
            }
        }
    }
}
