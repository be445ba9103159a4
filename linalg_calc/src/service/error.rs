use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::error::KernelError;

pub type ApiResult<T> = Result<T, ApiError>;

/// Failure rendered as `{"error": message}` with the given status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

// payloads that cannot be read as matrices/vectors are server errors,
// arithmetic and shape failures are client errors
impl From<KernelError> for ApiError {
    fn from(err: KernelError) -> Self {
        if err.is_malformed_input() {
            Self::internal(err.to_string())
        } else {
            Self::bad_request(err.to_string())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}
