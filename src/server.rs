//! HTTP server initialization and runtime setup.
//!
//! Handles store selection, database connections, migrations and the Axum
//! server lifecycle.

use crate::config::{Config, StoreBackend};
use crate::infrastructure::persistence::{PgDocumentRepository, PgDocumentTypeRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Opens a PostgreSQL pool using the pool settings from `config`.
///
/// # Errors
///
/// Returns an error if the database is unreachable within the connect timeout.
pub async fn connect_pool(config: &Config) -> Result<PgPool> {
    let database_url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL is required for the postgres store")?;

    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(database_url)
        .await
        .context("Failed to connect to database")
}

/// Builds the application state for the configured store backend.
///
/// For PostgreSQL this connects the pool and applies pending migrations.
///
/// # Errors
///
/// Returns an error if the database cannot be reached or a migration fails.
pub async fn build_state(config: &Config) -> Result<AppState> {
    match config.store_backend {
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; data is lost on shutdown");
            Ok(AppState::in_memory())
        }
        StoreBackend::Postgres => {
            let pool = connect_pool(config).await?;
            tracing::info!("Connected to database");

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to migrate")?;
            tracing::info!("Migrations applied");

            let pool = Arc::new(pool);
            let documents = Arc::new(PgDocumentRepository::new(
                pool.clone(),
                config.search_config.clone(),
            ));
            let document_types = Arc::new(PgDocumentTypeRepository::new(pool));

            Ok(AppState::new(documents, document_types))
        }
    }
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - The document store (PostgreSQL pool with migrations, or memory)
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config).await?;

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
