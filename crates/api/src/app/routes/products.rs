use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};

use crate::app::{dto, errors, routes, services::AppServices};

pub fn router() -> Router {
    // Only create is supported; any other method on this path is treated as
    // an unknown resource, not a 405.
    Router::new().route(
        "/",
        post(create_product).fallback(routes::resource_not_found),
    )
}

/// POST /products — the orchestrated create pipeline.
///
/// The body is taken raw so the empty-body case is distinguishable from a
/// parse failure, and so validation runs over the untyped JSON value.
pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    body: String,
) -> Response {
    if body.is_empty() {
        return errors::empty_body();
    }

    let parsed: serde_json::Value = match serde_json::from_str(&body) {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!(error = %e, "unparseable request body");
            return errors::bad_request("invalid JSON body");
        }
    };

    match services.create_product(&parsed).await {
        Ok(product) => (StatusCode::OK, Json(dto::product_to_json(&product))).into_response(),
        Err(e) => errors::create_error_to_response(e),
    }
}
