use std::sync::Arc;

use axum::{extract::Extension, response::IntoResponse, routing::post, Json, Router};
use serde_json::json;

use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/save", post(save_snapshot))
        .route("/load", post(load_snapshot))
}

pub async fn save_snapshot(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.save_now().await {
        Ok(entries) => Json(json!({ "saved": true, "entries": entries })).into_response(),
        Err(e) => errors::snapshot_error_to_response(e),
    }
}

pub async fn load_snapshot(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.load_now().await {
        Ok(loaded) => {
            let entries = services.organizer().await.total();
            Json(json!({ "loaded": loaded, "entries": entries })).into_response()
        }
        Err(e) => errors::snapshot_error_to_response(e),
    }
}
