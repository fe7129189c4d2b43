//! Request extractors for identity and session resolution.
//!
//! - [`session::VerifiedIdentity`] -- Verifies the upstream identity token.
//! - [`session::SessionUser`] -- Resolves the verified identity to an
//!   internal user id, rejecting when none is usable.

pub mod session;
