//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers call the repositories held in [`AppState`](crate::state::AppState)
//! and are the only place where repository outcomes become HTTP statuses,
//! via [`AppError`](crate::error::AppError).

pub mod character;
pub mod phrase;
pub mod quote;
