//! Success envelope shared by JSON endpoints.

use serde::Serialize;

use crate::error::ResponseCode;

/// `{"code":"0000","message":"success","data":...}`
///
/// Error responses use [`crate::error::ErrorBody`] instead, which has no
/// `data` field.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub code: &'static str,
    pub message: &'static str,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            code: ResponseCode::Success.code(),
            message: ResponseCode::Success.message(),
            data,
        }
    }
}
