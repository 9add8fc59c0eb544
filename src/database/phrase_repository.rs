use async_trait::async_trait;
use sqlx::PgPool;
use tracing::warn;
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::types::{Phrase, PhraseType};

/// Storage for one direction's phrase list. Every method is scoped to the
/// owning user and to `phrase_type()`.
#[async_trait]
pub trait PhrasesRepository: Send + Sync {
    fn phrase_type(&self) -> PhraseType;

    /// All phrases of the user in this direction, oldest first
    async fn phrases_for_user_with_uuid(&self, user_uuid: Uuid) -> Result<Vec<Phrase>, DatabaseError>;

    /// Insert a new phrase under a freshly generated UUID
    async fn add_phrase_for_user_with_uuid(
        &self,
        content: &str,
        translation: &str,
        user_uuid: Uuid,
    ) -> Result<Phrase, DatabaseError>;

    /// Replace content and translation of an existing phrase.
    ///
    /// Returns the phrase as given even when no row matched
    /// `(phrase_uuid, user_uuid, phrase_type)`.
    async fn update_phrase_for_user_with_uuid(
        &self,
        content: &str,
        translation: &str,
        phrase_uuid: Uuid,
        user_uuid: Uuid,
    ) -> Result<Phrase, DatabaseError>;
}

pub struct PgPhrasesRepository {
    pool: PgPool,
    phrase_type: PhraseType,
}

impl PgPhrasesRepository {
    pub fn new(phrase_type: PhraseType, pool: PgPool) -> Self {
        Self { pool, phrase_type }
    }
}

#[async_trait]
impl PhrasesRepository for PgPhrasesRepository {
    fn phrase_type(&self) -> PhraseType {
        self.phrase_type
    }

    async fn phrases_for_user_with_uuid(&self, user_uuid: Uuid) -> Result<Vec<Phrase>, DatabaseError> {
        let rows: Vec<(Uuid, String, String)> = sqlx::query_as(
            "SELECT uuid, phrase, translation FROM phrases \
             WHERE user_uuid = $1 AND phrase_type = $2 \
             ORDER BY created_at, uuid",
        )
        .bind(user_uuid)
        .bind(self.phrase_type.as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(uuid, content, translation)| Phrase {
                uuid,
                user_uuid,
                phrase_type: self.phrase_type,
                content,
                translation,
            })
            .collect())
    }

    async fn add_phrase_for_user_with_uuid(
        &self,
        content: &str,
        translation: &str,
        user_uuid: Uuid,
    ) -> Result<Phrase, DatabaseError> {
        let uuid = Uuid::new_v4();

        sqlx::query(
            "INSERT INTO phrases (uuid, phrase, translation, user_uuid, phrase_type) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(uuid)
        .bind(content)
        .bind(translation)
        .bind(user_uuid)
        .bind(self.phrase_type.as_str())
        .execute(&self.pool)
        .await?;

        Ok(Phrase {
            uuid,
            user_uuid,
            phrase_type: self.phrase_type,
            content: content.to_string(),
            translation: translation.to_string(),
        })
    }

    async fn update_phrase_for_user_with_uuid(
        &self,
        content: &str,
        translation: &str,
        phrase_uuid: Uuid,
        user_uuid: Uuid,
    ) -> Result<Phrase, DatabaseError> {
        let result = sqlx::query(
            "UPDATE phrases SET phrase = $1, translation = $2 \
             WHERE uuid = $3 AND user_uuid = $4 AND phrase_type = $5",
        )
        .bind(content)
        .bind(translation)
        .bind(phrase_uuid)
        .bind(user_uuid)
        .bind(self.phrase_type.as_str())
        .execute(&self.pool)
        .await?;

        // Zero rows is still reported as success to the caller.
        if result.rows_affected() == 0 {
            warn!(
                "Update of phrase {} for user {} ({}) matched no rows",
                phrase_uuid, user_uuid, self.phrase_type
            );
        }

        Ok(Phrase {
            uuid: phrase_uuid,
            user_uuid,
            phrase_type: self.phrase_type,
            content: content.to_string(),
            translation: translation.to_string(),
        })
    }
}
