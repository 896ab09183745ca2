//! Character entity model and DTOs.

use memequotes_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A character row from the `characters` table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Character {
    pub id: DbId,
    pub name: String,
    pub date_created: Timestamp,
    pub last_updated: Timestamp,
}

/// DTO for creating or renaming a character.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CharacterCommand {
    #[validate(length(min = 1, max = 255, message = "name must be 1 to 255 characters"))]
    pub name: String,
}

/// A character as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterResult {
    pub id: DbId,
    pub name: String,
    pub date_created: Timestamp,
    pub last_updated: Timestamp,
}

impl From<Character> for CharacterResult {
    fn from(ch: Character) -> Self {
        Self {
            id: ch.id,
            name: ch.name,
            date_created: ch.date_created,
            last_updated: ch.last_updated,
        }
    }
}

#[cfg(test)]
mod tests {
    use validator::Validate;

    use super::*;

    #[test]
    fn empty_name_is_rejected() {
        let cmd = CharacterCommand {
            name: String::new(),
        };
        let errors = cmd.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn overlong_name_is_rejected() {
        let cmd = CharacterCommand {
            name: "x".repeat(256),
        };
        assert!(cmd.validate().is_err());
    }

    #[test]
    fn regular_name_passes() {
        let cmd = CharacterCommand {
            name: "Comandante Fort".into(),
        };
        assert!(cmd.validate().is_ok());
    }
}
