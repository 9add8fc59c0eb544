// HTTP API Error Types
use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::database::DatabaseError;

/// Message the admin endpoint answers with when the password is wrong
pub const MAGIC_WORD_MESSAGE: &str = "ah ah ah, you didn't say the magic word";

/// HTTP API error. Every variant renders as `{"error": "<message>"}`.
#[derive(Debug, Error)]
pub enum ApiError {
    // 400 Bad Request
    #[error("{0}")]
    Authentication(String),

    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Storage(#[from] DatabaseError),

    // 401 Unauthorized
    #[error("{}", MAGIC_WORD_MESSAGE)]
    Unauthorized,

    // 500 Internal Server Error
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn authentication(message: impl Into<String>) -> Self {
        ApiError::Authentication(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::Internal(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Authentication(_) => StatusCode::BAD_REQUEST,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Storage(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Render the `{"error": "<message>"}` envelope. The message is JSON
    /// escaped, the layout matches what the frontend has always received.
    pub fn to_json_body(&self) -> String {
        let message = serde_json::Value::String(self.to_string());
        format!(r#"{{"error": {}}}"#, message)
    }
}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            ApiError::Storage(e) => tracing::error!("Storage error: {}", e),
            ApiError::Internal(msg) => tracing::error!("Internal error: {}", msg),
            ApiError::Unauthorized => tracing::warn!("Rejected admin request with bad password"),
            ApiError::Authentication(msg) | ApiError::Validation(msg) => {
                tracing::debug!("Rejected request: {}", msg)
            }
        }

        (
            status,
            [(header::CONTENT_TYPE, "application/json")],
            self.to_json_body(),
        )
            .into_response()
    }
}
