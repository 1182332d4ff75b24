//! Storefront HTTP server.
//!
//! Reads configuration from flags, the environment, and an optional `.env`
//! file, wires the configured stores, and serves until Ctrl-C.

use clap::Parser;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use eyre::WrapErr;
use std::sync::Arc;
use storefront::api::{self, AppState};
use storefront::auth::{JwksTokenVerifier, SharedTokenVerifier};
use storefront::config::{AppConfig, ProductStorage};
use storefront::message::adapters::InMemoryMessageRepository;
use storefront::product::adapters::{InMemoryProductRepository, PostgresProductRepository};
use storefront::product::ports::ProductRepository;
use storefront::telemetry;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let dotenv = dotenvy::dotenv();
    telemetry::init();
    if let Ok(path) = dotenv {
        tracing::debug!(path = %path.display(), "loaded environment file");
    }

    let config = AppConfig::parse();
    let products = product_repository(&config).await?;
    let verifier = token_verifier(&config)?;
    let state = AppState::new(Arc::new(InMemoryMessageRepository::new()), products, verifier);

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .wrap_err_with(|| format!("failed to bind {}", config.bind_addr))?;
    tracing::info!(addr = %config.bind_addr, store = ?config.product_store, "storefront listening");

    axum::serve(listener, api::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .wrap_err("server terminated")?;
    tracing::info!("storefront stopped");
    Ok(())
}

async fn product_repository(config: &AppConfig) -> eyre::Result<Arc<dyn ProductRepository>> {
    match config.product_storage()? {
        ProductStorage::Memory => Ok(Arc::new(InMemoryProductRepository::new())),
        ProductStorage::Postgres {
            database_url,
            pool_size,
        } => {
            let pool = tokio::task::spawn_blocking(move || {
                Pool::builder()
                    .max_size(pool_size)
                    .build(ConnectionManager::<PgConnection>::new(database_url))
            })
            .await?
            .wrap_err("failed to open PostgreSQL pool")?;
            let repository = PostgresProductRepository::new(pool);
            repository
                .ensure_schema()
                .await
                .wrap_err("failed to prepare products table")?;
            Ok(Arc::new(repository))
        }
    }
}

fn token_verifier(config: &AppConfig) -> eyre::Result<SharedTokenVerifier> {
    let client = reqwest::Client::builder()
        .build()
        .wrap_err("failed to build HTTP client")?;
    let verifier = match &config.jwk_set_uri {
        Some(jwks_uri) => {
            JwksTokenVerifier::with_jwk_set_uri(client, config.issuer_uri.as_str(), jwks_uri.as_str())
        }
        None => JwksTokenVerifier::discover(client, config.issuer_uri.as_str()),
    };
    Ok(Arc::new(verifier))
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
