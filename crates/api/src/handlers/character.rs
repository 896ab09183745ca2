//! Handlers for the `/character` resource.
//!
//! Deleting a character cascades to its phrases:
//! `/character/{character_id}/phrase[s]`

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use memequotes_core::error::CoreError;
use memequotes_core::types::DbId;
use memequotes_db::models::character::{CharacterCommand, CharacterResult};

use crate::error::{AppError, AppResult};
use crate::extract::{IdPath, ValidatedJson};
use crate::response::ResultsResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Character",
        id,
    })
}

/// POST /character
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CharacterCommand>,
) -> AppResult<Json<CharacterResult>> {
    let character = state.characters.save(&input).await?;
    tracing::info!(id = character.id, name = %character.name, "Character created");
    Ok(Json(character.into()))
}

/// GET /characters
pub async fn list(State(state): State<AppState>) -> AppResult<Json<ResultsResponse<CharacterResult>>> {
    let characters = state.characters.get_all().await?;
    tracing::debug!(count = characters.len(), "Listed characters");
    Ok(Json(ResultsResponse::from_items(characters)))
}

/// GET /character/{character_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<Json<CharacterResult>> {
    let character = state.characters.get(id).await?.ok_or_else(|| not_found(id))?;
    Ok(Json(character.into()))
}

/// PATCH /character/{character_id}
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
    ValidatedJson(input): ValidatedJson<CharacterCommand>,
) -> AppResult<Json<CharacterResult>> {
    let character = state
        .characters
        .update(id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(id, name = %character.name, "Character updated");
    Ok(Json(character.into()))
}

/// DELETE /character/{character_id}
///
/// Deletes every phrase of the character one by one, then the character.
/// The steps are not atomic: the first failing phrase delete aborts with 500,
/// leaving the character and any phrases not yet reached in place while the
/// phrases already removed stay removed. Deleting an absent character is a
/// success. Responds `410 Gone` with an empty body.
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<StatusCode> {
    let phrases = state.phrases.get_all_for_character(id).await?;

    let mut removed = Vec::with_capacity(phrases.len());
    for phrase in &phrases {
        if let Err(err) = state.phrases.delete(id, phrase.id).await {
            tracing::error!(
                character_id = id,
                phrase_id = phrase.id,
                removed = ?removed,
                error = %err,
                "Cascading delete aborted; character kept"
            );
            return Err(AppError::InternalError(format!(
                "deleting phrase {} of character {id} failed after removing {removed:?}: {err}",
                phrase.id
            )));
        }
        removed.push(phrase.id);
    }

    state.characters.delete(id).await?;
    tracing::info!(id, phrases_removed = removed.len(), "Character deleted");
    Ok(StatusCode::GONE)
}
