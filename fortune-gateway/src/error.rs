//! Error types for the HTTP surface
//!
//! All failures are surfaced to clients as plain-text bodies with a fixed
//! status code; nothing is retried.

use crate::backend::BackendError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

/// API error type
#[derive(Error, Debug)]
pub enum ApiError {
    /// The backend could not be reached (502)
    #[error("backend request failed: {0}")]
    Backend(#[from] reqwest::Error),

    /// A request or response body could not be decoded (500)
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The fortunes template could not be rendered (500)
    #[error("failed to render template: {0}")]
    Render(#[from] tera::Error),
}

/// API result type
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Stable label for the error counter
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Backend(_) => "backend",
            ApiError::Decode(_) => "decode",
            ApiError::Render(_) => "render",
        }
    }
}

impl From<BackendError> for ApiError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Request(e) => ApiError::Backend(e),
            BackendError::Decode(e) => ApiError::Decode(e),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::Backend(_) => StatusCode::BAD_GATEWAY,
            ApiError::Decode(_) | ApiError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        crate::metrics::record_error(self.kind());
        error!("{}", self);

        (status, self.to_string()).into_response()
    }
}
