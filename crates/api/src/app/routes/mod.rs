use axum::Router;
use axum::response::Response;

pub mod products;
pub mod system;

use crate::app::errors;

/// Router for the product endpoints.
pub fn router() -> Router {
    Router::new().nest("/products", products::router())
}

/// Handler for unsupported methods and unknown paths.
pub async fn resource_not_found() -> Response {
    errors::not_found()
}
