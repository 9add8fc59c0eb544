use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::manager::DatabaseError;
use crate::types::PhraseCount;

#[async_trait]
pub trait AdminRepository: Send + Sync {
    /// Phrase totals per owner, both directions combined
    async fn phrase_count_by_user_uuid(&self) -> Result<Vec<PhraseCount>, DatabaseError>;
}

pub struct PgAdminRepository {
    pool: PgPool,
}

impl PgAdminRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AdminRepository for PgAdminRepository {
    async fn phrase_count_by_user_uuid(&self) -> Result<Vec<PhraseCount>, DatabaseError> {
        let rows: Vec<(String, i64)> = sqlx::query_as(
            "SELECT user_uuid::text, COUNT(*) FROM phrases GROUP BY user_uuid ORDER BY user_uuid",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(user_uuid, phrase_count)| PhraseCount {
                user_uuid,
                phrase_count,
            })
            .collect())
    }
}
