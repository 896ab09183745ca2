//! Request extractors that reject malformed input with [`AppError`].
//!
//! Axum's stock `Path` and `Json` extractors answer with plain-text bodies and,
//! for JSON that is well-formed but missing fields, with 422. These wrappers
//! turn every such rejection into a 400 carrying the usual JSON error body.

use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// Path parameters, e.g. `IdPath<DbId>` or `IdPath<(DbId, DbId)>`.
///
/// A non-numeric id yields `400 BAD_REQUEST`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct IdPath<T>(pub T);

/// A JSON body that must deserialize and then pass [`Validate`].
///
/// Syntax errors, missing fields and a missing `Content-Type` yield
/// `400 BAD_REQUEST`; validation failures yield `400 VALIDATION_ERROR`.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(Self(value))
    }
}
