use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::error::ApiError;

/// Success body serialized as bare JSON (no envelope). Serialization is
/// deferred to `into_response` so a failure there becomes a 500 instead of
/// a half-written 200.
#[derive(Debug)]
pub struct JsonResponse<T: Serialize> {
    pub data: T,
    pub status_code: StatusCode,
}

impl<T: Serialize> JsonResponse<T> {
    /// 200 OK response
    pub fn ok(data: T) -> Self {
        Self {
            data,
            status_code: StatusCode::OK,
        }
    }
}

impl<T: Serialize> IntoResponse for JsonResponse<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec(&self.data) {
            Ok(body) => (
                self.status_code,
                [(header::CONTENT_TYPE, "application/json")],
                body,
            )
                .into_response(),
            Err(e) => {
                ApiError::internal(format!("failed to serialize response: {}", e)).into_response()
            }
        }
    }
}

pub type ApiResult<T> = Result<JsonResponse<T>, ApiError>;
