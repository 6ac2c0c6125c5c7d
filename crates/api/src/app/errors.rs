use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use musclemate_core::DomainError;
use musclemate_infra::StoreError;

/// Error body: `{"detail": <message>}`.
pub fn json_error(status: StatusCode, detail: impl Into<String>) -> axum::response::Response {
    (status, axum::Json(json!({ "detail": detail.into() }))).into_response()
}

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, msg),
        DomainError::InvalidReference(msg) => json_error(StatusCode::BAD_REQUEST, msg),
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, msg),
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not found"),
        DomainError::Unauthorized => {
            json_error(StatusCode::UNAUTHORIZED, "authentication required")
        }
        DomainError::Conflict(msg) => json_error(StatusCode::CONFLICT, msg),
    }
}

pub fn store_error_to_response(err: StoreError) -> axum::response::Response {
    match err {
        StoreError::Domain(domain) => domain_error_to_response(domain),
        StoreError::Database(e) => {
            tracing::error!(error = %e, "database failure");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "internal error")
        }
    }
}
