//! JSON error responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::calc::CalcError;

/// Error returned by endpoint handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Calc(#[from] CalcError),

    #[error("Path parameters unavailable for {0}")]
    PathParams(String),
}

/// Result type for endpoint handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Body of every error response: `{"error": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Calc(_) => StatusCode::BAD_REQUEST,
            Self::PathParams(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(status = %status, error = %self, "Request rejected");

        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
