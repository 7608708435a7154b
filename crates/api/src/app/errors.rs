use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use spicerack_core::DomainError;
use spicerack_infra::SnapshotError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::InvalidName(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_name", msg),
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
        DomainError::Configuration(msg) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "configuration_error", msg)
        }
    }
}

pub fn snapshot_error_to_response(err: SnapshotError) -> axum::response::Response {
    tracing::warn!(error = %err, "snapshot operation failed");
    match err {
        SnapshotError::Format(e) => json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "snapshot_corrupt",
            e.to_string(),
        ),
        SnapshotError::Io(e) => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "snapshot_io", e.to_string())
        }
        SnapshotError::Unavailable(msg) => {
            json_error(StatusCode::SERVICE_UNAVAILABLE, "snapshot_unavailable", msg)
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
