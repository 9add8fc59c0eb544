//! Param readers: one extractor per endpoint shape. Each turns the raw
//! request into a typed parameter object, or rejects it with an `ApiError`
//! before any use case runs.

pub mod add_phrase;
pub mod show_phrases;
pub mod update_phrase;

use axum::http::HeaderMap;
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;
use uuid::Uuid;

use crate::error::ApiError;

pub use add_phrase::{AddPhraseBody, AddPhraseParams};
pub use show_phrases::ShowPhrasesParams;
pub use update_phrase::UpdatePhraseParams;

/// Header carrying the caller's identity
pub const USER_TOKEN_HEADER: &str = "X-User-Token";

/// The token is the whole authentication story: any well-formed UUID is
/// accepted as the user's id.
pub fn read_user_token(headers: &HeaderMap) -> Result<Uuid, ApiError> {
    let token = headers.get(USER_TOKEN_HEADER).ok_or_else(|| {
        ApiError::authentication("missing X-User-Token header; I'm pretty sure you didn't authenticate")
    })?;

    let token = token
        .to_str()
        .map_err(|_| ApiError::validation("X-User-Token must be a UUID"))?;

    Uuid::parse_str(token.trim())
        .map_err(|e| ApiError::validation(format!("invalid X-User-Token: {}", e)))
}

/// Fields a phrase body may carry. `content` and `translation` must be
/// strings; `uuid` is kept raw since any non-UUID value just means "new".
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawPhraseFields {
    pub content: Option<String>,
    pub translation: Option<String>,
    pub uuid: Option<Value>,
}

impl RawPhraseFields {
    /// The item's UUID when it is a string that parses as one
    pub fn parsed_uuid(&self) -> Option<Uuid> {
        self.uuid
            .as_ref()
            .and_then(Value::as_str)
            .and_then(|u| Uuid::parse_str(u).ok())
    }
}

pub(crate) fn parse_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| ApiError::validation(format!("invalid JSON body: {}", e)))
}
