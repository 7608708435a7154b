use std::sync::Arc;

use axum::{
    extract::Extension,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use spicerack_core::DomainError;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new().route("/", get(get_settings).put(update_settings))
}

pub async fn get_settings(Extension(services): Extension<Arc<AppServices>>) -> impl IntoResponse {
    let org = services.organizer().await;
    Json(dto::settings_to_dto(&org))
}

/// Shelf counts outside `1..=26` are clamped, never rejected.
pub async fn update_settings(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::UpdateSettingsRequest>,
) -> axum::response::Response {
    if body.shelf_count.is_none() && body.ignore_duplicates.is_none() {
        return errors::domain_error_to_response(DomainError::validation(
            "expected shelf_count and/or ignore_duplicates",
        ));
    }

    let mut org = services.organizer().await;
    let before = org.revision();

    if let Some(requested) = body.shelf_count {
        org.set_shelf_count(requested);
    }
    if let Some(ignore) = body.ignore_duplicates {
        org.set_ignore_duplicates(ignore);
    }

    if org.revision() != before {
        services.notify_changed();
    }
    Json(dto::settings_to_dto(&org)).into_response()
}
