//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: shared organizer state, snapshot store and autosave worker
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use anyhow::Context;
use axum::{Extension, Router};
use tower::ServiceBuilder;

use spicerack_infra::{AppConfig, JsonFileSnapshotStore, SnapshotStore};
use spicerack_search::{CatalogProvider, StaticCatalog};

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`), backed
/// by the JSON snapshot file named in `config`.
pub async fn build_app(config: &AppConfig) -> anyhow::Result<Router> {
    let store: Arc<dyn SnapshotStore> = Arc::new(JsonFileSnapshotStore::new(&config.data_path));
    build_app_with_store(config, store).await
}

/// Build the router over any snapshot store, with the built-in catalog.
pub async fn build_app_with_store(
    config: &AppConfig,
    store: Arc<dyn SnapshotStore>,
) -> anyhow::Result<Router> {
    let catalog: Arc<dyn CatalogProvider> = Arc::new(StaticCatalog);
    let services = services::build_services(config, catalog, store)
        .await
        .context("failed to restore saved snapshot")?;

    services::AutosaveWorker::new(services.clone()).start();

    Ok(router(services))
}

/// Router over already-built services.
pub fn router(services: Arc<services::AppServices>) -> Router {
    routes::router()
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::request_logging))
                .layer(Extension(services)),
        )
}
