use std::sync::Arc;

use axum::{extract::Extension, response::IntoResponse, Json};
use serde_json::json;

use crate::app::services::AppServices;

pub async fn list_catalog(Extension(services): Extension<Arc<AppServices>>) -> impl IntoResponse {
    let items = services.organizer().await.catalog();
    Json(json!({ "items": items }))
}
