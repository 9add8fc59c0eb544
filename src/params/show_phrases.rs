use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap},
};
use uuid::Uuid;

use crate::error::ApiError;

use super::read_user_token;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowPhrasesParams {
    pub user_uuid: Uuid,
}

impl ShowPhrasesParams {
    pub fn read(headers: &HeaderMap) -> Result<Self, ApiError> {
        Ok(Self {
            user_uuid: read_user_token(headers)?,
        })
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ShowPhrasesParams
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Self::read(&parts.headers)
    }
}
