//! API route configuration.

use crate::api::handlers::{missing_code_handler, redirect_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Link routes.
///
/// # Endpoints
///
/// - `POST /url`          - Create a short link
/// - `GET  /url`          - Missing short code (400)
/// - `GET  /url/{code}`   - Redirect to the original URL
pub fn link_routes() -> Router<AppState> {
    Router::new()
        .route("/url", post(shorten_handler).get(missing_code_handler))
        .route("/url/{code}", get(redirect_handler))
}
