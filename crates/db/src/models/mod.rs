//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Deserialize` + `Validate` command DTO for writes
//! - A `Serialize` result DTO projected for API consumers

pub mod character;
pub mod phrase;
