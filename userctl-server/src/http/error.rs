//! API error type with IntoResponse
//!
//! Every error becomes the `{"error": "..."}` envelope with a 400 or 500 status.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::db::StoreError;
use crate::models::ErrorResponse;

/// API error type with HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Malformed request: missing path segment or undecodable body (400)
    BadRequest { message: String },

    /// Storage failure, message passed through verbatim (500)
    Store(StoreError),

    /// Server-side failure with a fixed caller-facing message (500)
    Internal { message: String },
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Store(_) | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::BadRequest { message } => message,
            // Logged with context where the error was raised
            Self::Store(e) => e.to_string(),
            Self::Internal { message } => message,
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}
