//! Identity primitives.
//!
//! - [`identity_token`] -- verification of the bearer token minted by the
//!   upstream identity provider.
//! - [`reconciler`] -- maps a verified external identity onto an internal
//!   user id, degrading instead of failing when the store is unavailable.

pub mod identity_token;
pub mod reconciler;
