//! Handler for link shortening endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};

use crate::api::dto::response::ApiResponse;
use crate::api::dto::shorten::{CreateUrlRequest, LinkResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for one URL.
///
/// # Endpoint
///
/// `POST /url`
///
/// # Request Body
///
/// ```json
/// { "original_url": "example.com" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "code": "0000",
///   "message": "success",
///   "data": {
///     "short_url": "00001",
///     "original_url": "https://example.com",
///     "created_at": "2025-01-01T00:00:00Z",
///     "updated_at": "2025-01-01T00:00:00Z"
///   }
/// }
/// ```
///
/// # Errors
///
/// - 400 `0003` if the body is not valid JSON or lacks `original_url`
/// - 500 `0001` if either storage step fails
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateUrlRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<LinkResponse>>, AppError> {
    let Json(payload) = payload?;

    let link = state
        .link_service
        .create_short_link(&payload.original_url)
        .await?;

    Ok(Json(ApiResponse::success(link.into())))
}
