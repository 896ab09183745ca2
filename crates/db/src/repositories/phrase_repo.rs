//! PostgreSQL repository for the `phrases` table.

use async_trait::async_trait;
use memequotes_core::timestamps;
use memequotes_core::types::DbId;
use sqlx::PgPool;

use crate::error::DbResult;
use crate::models::phrase::{Phrase, PhraseCommand};
use crate::repositories::PhraseRepository;

const COLUMNS: &str = "id, character_id, content, date_created, last_updated";

/// Provides CRUD operations for phrases, scoped to their owning character.
#[derive(Clone)]
pub struct PhraseRepo {
    pool: PgPool,
}

impl PhraseRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PhraseRepository for PhraseRepo {
    async fn get(&self, character_id: DbId, id: DbId) -> DbResult<Option<Phrase>> {
        tracing::debug!(character_id, id, "Getting phrase");
        let query = format!("SELECT {COLUMNS} FROM phrases WHERE id = $1");
        let phrase = sqlx::query_as::<_, Phrase>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        phrase.map(|p| p.owned_by(character_id)).transpose()
    }

    async fn get_all_for_character(&self, character_id: DbId) -> DbResult<Vec<Phrase>> {
        tracing::debug!(character_id, "Getting phrases for character");
        let query = format!("SELECT {COLUMNS} FROM phrases WHERE character_id = $1 ORDER BY id");
        let phrases = sqlx::query_as::<_, Phrase>(&query)
            .bind(character_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(phrases)
    }

    async fn save(&self, cmd: &PhraseCommand) -> DbResult<Phrase> {
        tracing::debug!(character_id = cmd.character_id, "Creating phrase");
        let now = timestamps::now();
        let query = format!(
            "INSERT INTO phrases (character_id, content, date_created, last_updated)
             VALUES ($1, $2, $3, $3)
             RETURNING {COLUMNS}"
        );
        let phrase = sqlx::query_as::<_, Phrase>(&query)
            .bind(cmd.character_id)
            .bind(&cmd.content)
            .bind(now)
            .fetch_one(&self.pool)
            .await?;
        Ok(phrase)
    }

    async fn delete(&self, character_id: DbId, id: DbId) -> DbResult<bool> {
        if self.get(character_id, id).await?.is_none() {
            tracing::debug!(character_id, id, "Phrase already absent, nothing to delete");
            return Ok(false);
        }
        tracing::debug!(character_id, id, "Deleting phrase");
        let result = sqlx::query("DELETE FROM phrases WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
