use memequotes_core::types::DbId;

/// PostgreSQL SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";
/// PostgreSQL SQLSTATE for `foreign_key_violation`.
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Errors produced by repositories.
///
/// "Not found" is never an error here: lookups return `Ok(None)` instead.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A phrase was resolved by id but belongs to a different character than
    /// the one the caller addressed it through.
    #[error("Phrase {phrase_id} does not belong to character {character_id}")]
    OwnershipMismatch { phrase_id: DbId, character_id: DbId },

    /// The store rejected a write that would duplicate an existing record.
    #[error("Duplicate record: {0}")]
    Duplicate(String),

    /// The store rejected a write that would break a relationship between rows.
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// The backing store could not be reached.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error(transparent)]
    Sqlx(sqlx::Error),
}

/// Convenience alias for repository return values.
pub type DbResult<T> = Result<T, DbError>;

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            let constraint = db_err.constraint().unwrap_or("unknown").to_string();
            match db_err.code().as_deref() {
                Some(UNIQUE_VIOLATION) => return DbError::Duplicate(constraint),
                Some(FOREIGN_KEY_VIOLATION) => return DbError::Constraint(constraint),
                _ => {}
            }
        }
        DbError::Sqlx(err)
    }
}
