//! Handlers for the `/phrase` resource.
//!
//! Phrases are nested under characters:
//! `/character/{character_id}/phrase[s][/{id}]`
//!
//! A phrase addressed through a character that does not own it answers
//! `401 UNAUTHORIZED`, never 404.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use memequotes_core::error::CoreError;
use memequotes_core::types::DbId;
use memequotes_db::models::phrase::{PhraseCommand, PhraseResult};

use crate::error::{AppError, AppResult};
use crate::extract::{IdPath, ValidatedJson};
use crate::response::ResultsResponse;
use crate::state::AppState;

/// POST /character/{character_id}/phrase
///
/// Overrides `input.character_id` with the value from the URL path.
pub async fn create(
    State(state): State<AppState>,
    IdPath(character_id): IdPath<DbId>,
    ValidatedJson(mut input): ValidatedJson<PhraseCommand>,
) -> AppResult<Json<PhraseResult>> {
    input.character_id = character_id;
    let phrase = state.phrases.save(&input).await?;
    tracing::info!(id = phrase.id, character_id, "Phrase created");
    Ok(Json(phrase.into()))
}

/// GET /character/{character_id}/phrases
///
/// The repository cannot tell "no phrases" from "no such character", so an
/// empty list is resolved here: 404 if the character does not exist, an empty
/// `results` list otherwise.
pub async fn list_by_character(
    State(state): State<AppState>,
    IdPath(character_id): IdPath<DbId>,
) -> AppResult<Json<ResultsResponse<PhraseResult>>> {
    let phrases = state.phrases.get_all_for_character(character_id).await?;

    if phrases.is_empty() && state.characters.get(character_id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Character",
            id: character_id,
        }));
    }

    tracing::debug!(character_id, count = phrases.len(), "Listed phrases");
    Ok(Json(ResultsResponse::from_items(phrases)))
}

/// GET /character/{character_id}/phrase/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath((character_id, id)): IdPath<(DbId, DbId)>,
) -> AppResult<Json<PhraseResult>> {
    let phrase = state
        .phrases
        .get(character_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Phrase",
            id,
        }))?;
    Ok(Json(phrase.into()))
}

/// DELETE /character/{character_id}/phrase/{id}
///
/// Deleting an absent phrase is a success. Responds `410 Gone`.
pub async fn delete(
    State(state): State<AppState>,
    IdPath((character_id, id)): IdPath<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let deleted = state.phrases.delete(character_id, id).await?;
    if deleted {
        tracing::info!(id, character_id, "Phrase deleted");
    }
    Ok(StatusCode::GONE)
}
