//! HTTP API application wiring (axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: the create-product pipeline over injected backends
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: response JSON mapping
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

use services::AppServices;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
///
/// Backends are injected via `AppServices`, constructed once at startup.
pub fn build_app(services: Arc<AppServices>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router().layer(Extension(services)))
        .fallback(routes::resource_not_found)
}
