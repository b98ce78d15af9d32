use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::app::services::CreateProductError;

/// Map a pipeline failure to its HTTP response.
///
/// Malformed input gets a specific 400 reason; external-dependency failures
/// are logged with context and flattened into a generic 500 so dependency
/// details never leak to the caller.
pub fn create_error_to_response(err: CreateProductError) -> Response {
    match err {
        CreateProductError::Validation(e) => bad_request(e.reason()),
        CreateProductError::Conversion(e) => {
            tracing::error!(error = ?e, "error while converting currency");
            internal_error()
        }
        CreateProductError::Store(e) => {
            tracing::error!(error = ?e, "error while saving product");
            internal_error()
        }
    }
}

pub fn bad_request(reason: &str) -> Response {
    (StatusCode::BAD_REQUEST, format!("Bad request, {reason}")).into_response()
}

pub fn internal_error() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
}

pub fn empty_body() -> Response {
    (StatusCode::UNPROCESSABLE_ENTITY, "Empty body").into_response()
}

pub fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "Resource not found").into_response()
}
