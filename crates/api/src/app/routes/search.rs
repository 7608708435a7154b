use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    response::IntoResponse,
    Json,
};

use crate::app::dto;
use crate::app::services::AppServices;

pub async fn search(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<dto::SearchParams>,
) -> impl IntoResponse {
    let org = services.organizer().await;
    let limit = params.limit.unwrap_or_else(|| org.search_limit());
    let results = org.search_with_limit(&params.q, limit);

    Json(dto::SearchResponse {
        query: params.q,
        results,
    })
}
