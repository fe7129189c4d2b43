//! Domain logic for learner progress and bookmark persistence.
//!
//! Everything here is pure: no I/O, no database types. The `db` crate stores
//! what this crate validates, and the `api` crate maps [`error::CoreError`]
//! onto HTTP responses.

pub mod bookmark;
pub mod error;
pub mod identity;
pub mod progress;
pub mod types;
pub mod validation;
