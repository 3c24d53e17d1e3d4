//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: repository wiring
//! - `controller.rs`: generic CRUD controller over a repository
//! - `routes/`: HTTP routes + handlers (one file per resource)
//! - `render.rs`: reply → HTTP response mapping
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use crate::config::ApiConfig;
use crate::middleware;

pub mod controller;
pub mod errors;
pub mod render;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(config: &ApiConfig) -> Router {
    let services = Arc::new(services::build_services(config));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::trace_requests))
                .layer(Extension(services)),
        )
}
