//! Domain types shared by the storage and HTTP layers.

pub mod error;
pub mod quotes;
pub mod timestamps;
pub mod types;
