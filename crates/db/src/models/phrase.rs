//! Phrase entity model and DTOs.

use memequotes_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::error::{DbError, DbResult};

/// A phrase row from the `phrases` table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Phrase {
    pub id: DbId,
    pub character_id: DbId,
    pub content: String,
    pub date_created: Timestamp,
    pub last_updated: Timestamp,
}

impl Phrase {
    /// Return the phrase if it belongs to `character_id`, otherwise an
    /// [`DbError::OwnershipMismatch`].
    pub fn owned_by(self, character_id: DbId) -> DbResult<Self> {
        if self.character_id == character_id {
            Ok(self)
        } else {
            Err(DbError::OwnershipMismatch {
                phrase_id: self.id,
                character_id,
            })
        }
    }
}

/// DTO for creating a phrase.
///
/// `character_id` may be omitted from the request body; handlers always
/// overwrite it with the id from the URL path.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PhraseCommand {
    #[serde(default)]
    pub character_id: DbId,
    #[validate(length(min = 1, message = "content must not be empty"))]
    pub content: String,
}

/// A phrase as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhraseResult {
    pub id: DbId,
    pub character_id: DbId,
    pub content: String,
    pub date_created: Timestamp,
    pub last_updated: Timestamp,
}

impl From<Phrase> for PhraseResult {
    fn from(phrase: Phrase) -> Self {
        Self {
            id: phrase.id,
            character_id: phrase.character_id,
            content: phrase.content,
            date_created: phrase.date_created,
            last_updated: phrase.last_updated,
        }
    }
}
