use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::HeaderMap,
};
use serde_json::Value;
use uuid::Uuid;

use crate::error::ApiError;
use crate::usecases::AddPhraseItem;

use super::{parse_json, read_user_token, RawPhraseFields};

/// Shape of an add body. An object is the single-phrase form and gets a
/// single object back; an array is a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddPhraseBody {
    Single(AddPhraseItem),
    Batch(Vec<AddPhraseItem>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddPhraseParams {
    pub user_uuid: Uuid,
    pub body: AddPhraseBody,
}

impl AddPhraseParams {
    pub fn read(headers: &HeaderMap, body: &[u8]) -> Result<Self, ApiError> {
        let user_uuid = read_user_token(headers)?;

        let body = match parse_json::<Value>(body)? {
            Value::Array(items) => {
                if items.is_empty() {
                    return Err(ApiError::validation("must specify at least one phrase"));
                }
                let items = items
                    .into_iter()
                    .map(|item| {
                        let fields = serde_json::from_value(item)
                            .map_err(|e| ApiError::validation(format!("invalid JSON body: {}", e)))?;
                        to_item(fields)
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                AddPhraseBody::Batch(items)
            }
            object @ Value::Object(_) => {
                let fields = serde_json::from_value(object)
                    .map_err(|e| ApiError::validation(format!("invalid JSON body: {}", e)))?;
                AddPhraseBody::Single(to_item(fields)?)
            }
            _ => {
                return Err(ApiError::validation(
                    "expected a phrase object or an array of phrases",
                ))
            }
        };

        Ok(Self { user_uuid, body })
    }
}

/// A parseable `uuid` makes the item an update; anything else is a new phrase.
fn to_item(fields: RawPhraseFields) -> Result<AddPhraseItem, ApiError> {
    let uuid = fields.parsed_uuid();
    let content = match fields.content {
        Some(content) if !content.is_empty() => content,
        _ => return Err(ApiError::validation("could not read phrase content from request body")),
    };
    let translation = fields.translation.unwrap_or_default();

    Ok(match uuid {
        Some(uuid) => AddPhraseItem::ExistingPhrase {
            uuid,
            content,
            translation,
        },
        None => AddPhraseItem::NewPhrase { content, translation },
    })
}

#[async_trait]
impl<S> FromRequest<S> for AddPhraseParams
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // Identity is checked before the body is touched
        read_user_token(req.headers())?;
        let headers = req.headers().clone();

        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::validation(e.body_text()))?;

        Self::read(&headers, &body)
    }
}
