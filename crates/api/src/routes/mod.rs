pub mod character;
pub mod health;
pub mod phrase;
pub mod quote;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// Route hierarchy:
///
/// ```text
/// /character                                       create
/// /characters                                      list
/// /character/{character_id}                        get, update (PATCH), delete
/// /character/{character_id}/phrase                 create
/// /character/{character_id}/phrases                list
/// /character/{character_id}/phrase/{id}            get, delete
///
/// /miami                                           random quote
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(character::router())
        .merge(quote::router())
}
