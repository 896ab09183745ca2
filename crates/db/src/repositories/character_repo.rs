//! PostgreSQL repository for the `characters` table.

use async_trait::async_trait;
use memequotes_core::timestamps;
use memequotes_core::types::DbId;
use sqlx::PgPool;

use crate::error::DbResult;
use crate::models::character::{Character, CharacterCommand};
use crate::repositories::{CharacterRepository, StoreHealth};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, date_created, last_updated";

/// Provides CRUD operations for characters.
#[derive(Clone)]
pub struct CharacterRepo {
    pool: PgPool,
}

impl CharacterRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CharacterRepository for CharacterRepo {
    async fn get(&self, id: DbId) -> DbResult<Option<Character>> {
        tracing::debug!(id, "Getting character");
        let query = format!("SELECT {COLUMNS} FROM characters WHERE id = $1");
        let character = sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(character)
    }

    async fn get_all(&self) -> DbResult<Vec<Character>> {
        tracing::debug!("Getting all characters");
        let query = format!("SELECT {COLUMNS} FROM characters ORDER BY id");
        let characters = sqlx::query_as::<_, Character>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(characters)
    }

    async fn save(&self, cmd: &CharacterCommand) -> DbResult<Character> {
        tracing::debug!(name = %cmd.name, "Creating character");
        let now = timestamps::now();
        let query = format!(
            "INSERT INTO characters (name, date_created, last_updated)
             VALUES ($1, $2, $2)
             RETURNING {COLUMNS}"
        );
        let character = sqlx::query_as::<_, Character>(&query)
            .bind(&cmd.name)
            .bind(now)
            .fetch_one(&self.pool)
            .await?;
        Ok(character)
    }

    /// `last_updated` never moves backwards or stands still, even if two
    /// updates land inside the same microsecond.
    async fn update(&self, id: DbId, cmd: &CharacterCommand) -> DbResult<Option<Character>> {
        tracing::debug!(id, name = %cmd.name, "Updating character");
        let query = format!(
            "UPDATE characters SET
                name = $2,
                last_updated = GREATEST($3, last_updated + INTERVAL '1 microsecond')
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let character = sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .bind(&cmd.name)
            .bind(timestamps::now())
            .fetch_optional(&self.pool)
            .await?;
        Ok(character)
    }

    async fn delete(&self, id: DbId) -> DbResult<bool> {
        tracing::debug!(id, "Deleting character");
        let result = sqlx::query("DELETE FROM characters WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl StoreHealth for CharacterRepo {
    async fn ping(&self) -> DbResult<()> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }
}
