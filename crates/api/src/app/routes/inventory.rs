use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
    Json, Router,
};

use spicerack_core::EntryId;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_jars).post(add_jar))
        .route("/reset", post(reset))
        .route("/:id", delete(remove_jar))
}

pub async fn list_jars(Extension(services): Extension<Arc<AppServices>>) -> impl IntoResponse {
    let org = services.organizer().await;
    Json(dto::inventory_to_dto(&org))
}

pub async fn add_jar(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::AddJarRequest>,
) -> axum::response::Response {
    let added = services.organizer().await.add(&body.name);
    match added {
        Ok(entry) => {
            services.notify_changed();
            (StatusCode::CREATED, Json(entry)).into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn remove_jar(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: EntryId = match id.parse() {
        Ok(id) => id,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let removed = services.organizer().await.remove_existing(&id);
    match removed {
        Ok(()) => {
            services.notify_changed();
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn reset(Extension(services): Extension<Arc<AppServices>>) -> StatusCode {
    services.organizer().await.reset();
    services.notify_changed();
    StatusCode::NO_CONTENT
}
