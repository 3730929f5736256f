//! Handler for short URL redirect.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /url/{code}`
///
/// Returns 307 Temporary Redirect with `Location` set to the stored URL and
/// no body.
///
/// # Errors
///
/// - 400 `0003` if the code segment is empty
/// - 400 `0002` if no link has this code
/// - 500 `0001` on storage errors, or if the stored URL cannot be sent as a
///   `Location` header
pub async fn redirect_handler(
    State(state): State<AppState>,
    code: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(code) = code.map_err(|e| {
        tracing::debug!(reason = %e.body_text(), "Rejected short code path");
        AppError::InvalidRequest
    })?;

    if code.is_empty() {
        return Err(AppError::InvalidRequest);
    }

    let link = state.link_service.resolve(&code).await?;

    let location = HeaderValue::try_from(link.original_url.as_str()).map_err(|e| {
        tracing::error!(
            id = link.id,
            code = %code,
            error = %e,
            "Stored URL is not a valid Location header"
        );
        AppError::Internal
    })?;

    Ok((StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]))
}

/// Answers `GET /url` with the short code segment missing.
pub async fn missing_code_handler() -> AppError {
    AppError::InvalidRequest
}
