use std::sync::Arc;
use uuid::Uuid;

use crate::database::{DatabaseError, PhrasesRepository};

use super::{PhraseResponse, PhrasesResponse};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowPhrasesRequest {
    pub user_uuid: Uuid,
}

#[derive(Clone)]
pub struct ShowPhrasesUseCase {
    repository: Arc<dyn PhrasesRepository>,
}

impl ShowPhrasesUseCase {
    pub fn new(repository: Arc<dyn PhrasesRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, request: ShowPhrasesRequest) -> Result<PhrasesResponse, DatabaseError> {
        let phrases = self
            .repository
            .phrases_for_user_with_uuid(request.user_uuid)
            .await?;

        Ok(phrases.into_iter().map(PhraseResponse::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::InMemoryPhrasesRepository;
    use crate::types::{Phrase, PhraseType};

    #[tokio::test]
    async fn maps_stored_phrases_to_responses() {
        let repo = Arc::new(InMemoryPhrasesRepository::new(PhraseType::EnglishToFrench));
        let user_uuid = Uuid::new_v4();
        let phrase_uuid = Uuid::new_v4();
        repo.seed(Phrase {
            uuid: phrase_uuid,
            user_uuid,
            phrase_type: PhraseType::EnglishToFrench,
            content: "good night".to_string(),
            translation: "bonne nuit".to_string(),
        });

        let response = ShowPhrasesUseCase::new(repo.clone())
            .execute(ShowPhrasesRequest { user_uuid })
            .await
            .unwrap();

        assert_eq!(
            response,
            vec![PhraseResponse {
                uuid: phrase_uuid,
                content: "good night".to_string(),
                translation: "bonne nuit".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn no_phrases_is_an_empty_list() {
        let repo = Arc::new(InMemoryPhrasesRepository::new(PhraseType::FrenchToEnglish));

        let response = ShowPhrasesUseCase::new(repo)
            .execute(ShowPhrasesRequest {
                user_uuid: Uuid::new_v4(),
            })
            .await
            .unwrap();

        assert!(response.is_empty());
    }

    #[tokio::test]
    async fn propagates_repository_errors() {
        let repo = Arc::new(InMemoryPhrasesRepository::new(PhraseType::FrenchToEnglish));
        repo.fail_lists();

        let result = ShowPhrasesUseCase::new(repo)
            .execute(ShowPhrasesRequest {
                user_uuid: Uuid::new_v4(),
            })
            .await;

        assert!(result.is_err());
    }
}
