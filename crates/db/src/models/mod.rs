//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` request DTO, converted into a validated write before it
//!   reaches a repository

pub mod bookmark;
pub mod progress;
pub mod user;
