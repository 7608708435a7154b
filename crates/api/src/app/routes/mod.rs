use axum::{routing::get, Router};

pub mod catalog;
pub mod inventory;
pub mod search;
pub mod settings;
pub mod shelves;
pub mod snapshot;
pub mod system;

pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .route("/shelves", get(shelves::get_shelves))
        .route("/search", get(search::search))
        .route("/catalog", get(catalog::list_catalog))
        .nest("/inventory", inventory::router())
        .nest("/settings", settings::router())
        .nest("/snapshot", snapshot::router())
}
