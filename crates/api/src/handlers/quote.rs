//! Handler for the `/miami` easter egg.

use axum::Json;
use serde::Serialize;

/// Response payload for `/miami`.
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub message: &'static str,
}

/// GET /miami -- a random catchphrase.
pub async fn random_quote() -> Json<QuoteResponse> {
    tracing::info!("Received request in Miami");
    Json(QuoteResponse {
        message: memequotes_core::quotes::random_quote(),
    })
}
