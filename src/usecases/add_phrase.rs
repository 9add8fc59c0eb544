use std::sync::Arc;
use uuid::Uuid;

use crate::database::{DatabaseError, PhrasesRepository};

use super::{PhraseResponse, PhrasesResponse};

/// One entry of an add request. Whether the client sent a `uuid` decides
/// between insert and update-in-place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddPhraseItem {
    NewPhrase {
        content: String,
        translation: String,
    },
    ExistingPhrase {
        uuid: Uuid,
        content: String,
        translation: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddPhraseRequest {
    pub user_uuid: Uuid,
    pub phrases: Vec<AddPhraseItem>,
}

#[derive(Clone)]
pub struct AddPhraseUseCase {
    repository: Arc<dyn PhrasesRepository>,
}

impl AddPhraseUseCase {
    pub fn new(repository: Arc<dyn PhrasesRepository>) -> Self {
        Self { repository }
    }

    /// Save every item in input order. Stops at the first failure; items
    /// written before it stay written.
    pub async fn execute(&self, request: AddPhraseRequest) -> Result<PhrasesResponse, DatabaseError> {
        let mut responses = Vec::with_capacity(request.phrases.len());
        for item in &request.phrases {
            responses.push(self.execute_single(request.user_uuid, item).await?);
        }
        Ok(responses)
    }

    pub async fn execute_single(
        &self,
        user_uuid: Uuid,
        item: &AddPhraseItem,
    ) -> Result<PhraseResponse, DatabaseError> {
        let phrase = match item {
            AddPhraseItem::NewPhrase { content, translation } => {
                self.repository
                    .add_phrase_for_user_with_uuid(content, translation, user_uuid)
                    .await?
            }
            AddPhraseItem::ExistingPhrase { uuid, content, translation } => {
                self.repository
                    .update_phrase_for_user_with_uuid(content, translation, *uuid, user_uuid)
                    .await?
            }
        };
        Ok(phrase.into())
    }
}
