//! Per-request deadline.

use axum::http::StatusCode;
use std::time::Duration;
use tower_http::timeout::TimeoutLayer;

/// Bounds every request by `timeout`.
///
/// A request still running at the deadline is dropped and answered with
/// `408 Request Timeout`. Dropping a create between its insert and update
/// leaves the inserted record without a short code.
pub fn layer(timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout)
}
