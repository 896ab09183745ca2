use axum::routing::get;
use axum::Router;

use crate::handlers::quote;
use crate::state::AppState;

/// GET /miami
pub fn router() -> Router<AppState> {
    Router::new().route("/miami", get(quote::random_quote))
}
