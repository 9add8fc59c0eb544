use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::HeaderMap,
};
use uuid::Uuid;

use crate::error::ApiError;

use super::{parse_json, read_user_token, RawPhraseFields};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatePhraseParams {
    pub user_uuid: Uuid,
    pub phrase_uuid: Uuid,
    pub content: String,
    pub translation: String,
}

impl UpdatePhraseParams {
    /// `phrase_uuid` is the raw `{uuid}` path segment
    pub fn read(headers: &HeaderMap, phrase_uuid: &str, body: &[u8]) -> Result<Self, ApiError> {
        let user_uuid = read_user_token(headers)?;

        // Both fields are optional here, a missing one is stored as ""
        let fields: RawPhraseFields = parse_json(body)?;

        let phrase_uuid =
            Uuid::parse_str(phrase_uuid).map_err(|_| ApiError::validation("invalid phrase uuid"))?;

        Ok(Self {
            user_uuid,
            phrase_uuid,
            content: fields.content.unwrap_or_default(),
            translation: fields.translation.unwrap_or_default(),
        })
    }
}

#[async_trait]
impl<S> FromRequest<S> for UpdatePhraseParams
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        read_user_token(req.headers())?;

        let (mut parts, body) = req.into_parts();
        let Path(phrase_uuid) = Path::<String>::from_request_parts(&mut parts, state)
            .await
            .map_err(|_| ApiError::validation("invalid phrase uuid"))?;
        let headers = parts.headers.clone();

        let body = Bytes::from_request(Request::from_parts(parts, body), state)
            .await
            .map_err(|e| ApiError::validation(e.body_text()))?;

        Self::read(&headers, &phrase_uuid, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    const USER: &str = "e2580a5b-cabb-4387-bcea-30e9401a2aa4";
    const PHRASE: &str = "2dff2424-c888-4785-a91d-6fcb006dabe5";

    fn headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("X-User-Token", HeaderValue::from_static(USER));
        headers
    }

    #[test]
    fn reads_token_path_and_body() {
        let params = UpdatePhraseParams::read(
            &headers(),
            PHRASE,
            br#"{"content": "bonsoir", "translation": "good evening"}"#,
        )
        .unwrap();

        assert_eq!(
            params,
            UpdatePhraseParams {
                user_uuid: Uuid::parse_str(USER).unwrap(),
                phrase_uuid: Uuid::parse_str(PHRASE).unwrap(),
                content: "bonsoir".to_string(),
                translation: "good evening".to_string(),
            }
        );
    }

    #[test]
    fn missing_fields_default_to_empty_strings() {
        let params = UpdatePhraseParams::read(&headers(), PHRASE, b"{}").unwrap();
        assert_eq!(params.content, "");
        assert_eq!(params.translation, "");
    }

    #[test]
    fn rejects_a_malformed_phrase_uuid() {
        let err = UpdatePhraseParams::read(&headers(), "nope", b"{}").unwrap_err();
        assert_eq!(err.to_string(), "invalid phrase uuid");
    }

    #[test]
    fn rejects_malformed_json() {
        let err = UpdatePhraseParams::read(&headers(), PHRASE, b"{").unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn requires_the_user_token() {
        let err = UpdatePhraseParams::read(&HeaderMap::new(), PHRASE, b"{}").unwrap_err();
        assert!(matches!(err, ApiError::Authentication(_)));
    }
}
