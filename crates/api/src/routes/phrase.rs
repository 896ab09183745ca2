use axum::routing::{get, post};
use axum::Router;

use crate::handlers::phrase;
use crate::state::AppState;

/// Routes nested at `/character/{character_id}`.
///
/// ```text
/// POST   /phrase                                   -> create
/// GET    /phrases                                  -> list_by_character
/// GET    /phrase/{id}                              -> get_by_id
/// DELETE /phrase/{id}                              -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/phrase", post(phrase::create))
        .route("/phrases", get(phrase::list_by_character))
        .route("/phrase/{id}", get(phrase::get_by_id).delete(phrase::delete))
}
