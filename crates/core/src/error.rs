use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_entity_and_id() {
        let err = CoreError::NotFound {
            entity: "Character",
            id: 7,
        };
        assert_eq!(err.to_string(), "Entity not found: Character with id 7");
    }

    #[test]
    fn unauthorized_keeps_message() {
        let err = CoreError::Unauthorized("phrase 5 belongs to another character".into());
        assert_eq!(
            err.to_string(),
            "Unauthorized: phrase 5 belongs to another character"
        );
    }
}
