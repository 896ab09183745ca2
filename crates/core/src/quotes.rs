//! Canned catchphrases served by the `/miami` endpoint.

use rand::seq::IndexedRandom;

/// Every quote `random_quote` can return.
pub const QUOTES: [&str; 7] = [
    "en mi rolex falta un minuto todavía",
    "yo no manejo el rating, manejo un Rolls Royce",
    "sacá la mano de ahí carajo!",
    "te va queda letrificada loca!",
    "el tren de Ricardo Fort pasa una sola vez en la vida",
    "maiameeeeee",
    "basta chicos",
];

/// Pick one of [`QUOTES`] uniformly at random.
pub fn random_quote() -> &'static str {
    // The list is a non-empty constant, so `choose` always yields a value.
    QUOTES.choose(&mut rand::rng()).copied().unwrap_or(QUOTES[0])
}
