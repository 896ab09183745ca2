//! Route definitions for characters and their phrase sub-resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::character;
use crate::routes::phrase;
use crate::state::AppState;

/// Character routes.
///
/// ```text
/// POST   /character                                -> create
/// GET    /characters                               -> list
/// GET    /character/{character_id}                 -> get_by_id
/// PATCH  /character/{character_id}                 -> update
/// DELETE /character/{character_id}                 -> delete (cascades to phrases)
/// ```
///
/// Phrase routes are nested under `/character/{character_id}`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/character", post(character::create))
        .route("/characters", get(character::list))
        .route(
            "/character/{character_id}",
            get(character::get_by_id)
                .patch(character::update)
                .delete(character::delete),
        )
        .nest("/character/{character_id}", phrase::router())
}
