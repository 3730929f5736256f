//! Application error types and the fixed response code table.
//!
//! Every JSON response carries a four-digit `code` and a human `message`
//! drawn from [`ResponseCode`]. Handlers and services never build codes ad
//! hoc: they return an [`AppError`] variant and the table does the rest.
//!
//! Underlying causes (database errors, rejected bodies) are logged where they
//! occur and never rendered to the caller.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Closed set of response kinds with their wire code, message and HTTP status.
///
/// `NotFound` maps to `400 Bad Request`, not `404`. Existing clients depend on
/// that mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseCode {
    Success,
    Internal,
    NotFound,
    InvalidRequest,
    Unauthorized,
}

impl ResponseCode {
    /// Four-digit code sent in the `code` field.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Success => "0000",
            Self::Internal => "0001",
            Self::NotFound => "0002",
            Self::InvalidRequest => "0003",
            Self::Unauthorized => "0004",
        }
    }

    /// Human readable text sent in the `message` field.
    pub const fn message(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Internal => "error internal",
            Self::NotFound => "data not found",
            Self::InvalidRequest => "invalid request",
            Self::Unauthorized => "unauthorize request",
        }
    }

    pub const fn status(self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound => StatusCode::BAD_REQUEST,
            Self::InvalidRequest => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
        }
    }
}

/// JSON body of every non-2xx response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: &'static str,
}

impl From<ResponseCode> for ErrorBody {
    fn from(kind: ResponseCode) -> Self {
        Self {
            code: kind.code(),
            message: kind.message(),
        }
    }
}

/// Domain level failure reported by services and handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    #[error("invalid request")]
    InvalidRequest,

    #[error("data not found")]
    NotFound,

    #[error("error internal")]
    Internal,

    #[error("unauthorize request")]
    Unauthorized,
}

impl AppError {
    /// Entry in the response table for this error.
    pub const fn response_code(self) -> ResponseCode {
        match self {
            Self::InvalidRequest => ResponseCode::InvalidRequest,
            Self::NotFound => ResponseCode::NotFound,
            Self::Internal => ResponseCode::Internal,
            Self::Unauthorized => ResponseCode::Unauthorized,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let kind = self.response_code();
        (kind.status(), Json(ErrorBody::from(kind))).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            tracing::error!(
                constraint = ?db.constraint(),
                "Duplicate short code rejected by store"
            );
        } else {
            tracing::error!(error = %e, "Database error");
        }

        AppError::Internal
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(reason = %rejection.body_text(), "Rejected request body");
        AppError::InvalidRequest
    }
}
