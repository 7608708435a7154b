use std::sync::Arc;

use axum::{extract::Extension, response::IntoResponse, Json};

use crate::app::dto;
use crate::app::services::AppServices;

pub async fn get_shelves(Extension(services): Extension<Arc<AppServices>>) -> impl IntoResponse {
    let org = services.organizer().await;
    Json(dto::shelves_to_dto(&org))
}
