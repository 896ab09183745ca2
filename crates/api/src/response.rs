//! Shared response envelope types for API handlers.

use serde::Serialize;

/// `{ "results": [...] }` envelope used by every list endpoint.
#[derive(Debug, Serialize)]
pub struct ResultsResponse<T: Serialize> {
    pub results: Vec<T>,
}

impl<T: Serialize> ResultsResponse<T> {
    /// Project each item into its API shape and wrap the list.
    pub fn from_items<I, U>(items: I) -> Self
    where
        I: IntoIterator<Item = U>,
        U: Into<T>,
    {
        Self {
            results: items.into_iter().map(Into::into).collect(),
        }
    }
}
