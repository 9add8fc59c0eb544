use axum::{extract::State, http::HeaderMap};
use std::sync::Arc;

use crate::database::AdminRepository;
use crate::error::ApiError;
use crate::middleware::{ApiResult, JsonResponse};
use crate::types::PhraseCount;

/// Header carrying the shared admin secret
pub const PASSWORD_HEADER: &str = "X-Password";

#[derive(Clone)]
pub struct AdminState {
    repository: Arc<dyn AdminRepository>,
    password: Arc<str>,
}

impl AdminState {
    /// An empty password locks the endpoint for everyone
    pub fn new(repository: Arc<dyn AdminRepository>, password: impl Into<String>) -> Self {
        Self {
            repository,
            password: password.into().into(),
        }
    }

    fn accepts(&self, headers: &HeaderMap) -> bool {
        let supplied = headers.get(PASSWORD_HEADER).and_then(|v| v.to_str().ok());
        !self.password.is_empty() && supplied == Some(&*self.password)
    }
}

/// GET /api/admin - Phrase counts per user
pub async fn get(State(state): State<AdminState>, headers: HeaderMap) -> ApiResult<Vec<PhraseCount>> {
    if !state.accepts(&headers) {
        return Err(ApiError::Unauthorized);
    }

    let counts = state
        .repository
        .phrase_count_by_user_uuid()
        .await
        .map_err(|e| ApiError::internal(e.to_string()))?;

    Ok(JsonResponse::ok(counts))
}
