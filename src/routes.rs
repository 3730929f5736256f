//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /url`        - Create a short link
//! - `GET  /url/{code}` - Redirect to the original URL
//! - `GET  /health`     - Health check (link store)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Timeout** - Per-request deadline
//! - **Path normalization** - Trailing slash handling, so `GET /url/` is
//!   answered as a missing short code

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{timeout, tracing as trace};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use std::time::Duration;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `request_timeout` - deadline applied to every request
pub fn app_router(state: AppState, request_timeout: Duration) -> NormalizePath<Router> {
    let router = Router::new()
        .merge(api::routes::link_routes())
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(timeout::layer(request_timeout))
        .layer(trace::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
