//! Identity reconciliation: external identity in, internal user id out.
//!
//! Authentication and storage identity are separate failure domains. A
//! verified identity stays verified even when the identity store cannot be
//! written; the request then proceeds as [`Reconciliation::Degraded`] and
//! anything needing an internal id treats it as signed out.

use learndsa_core::identity::ExternalIdentity;
use learndsa_core::types::DbId;
use learndsa_db::models::user::User;
use learndsa_db::repositories::UserRepo;
use learndsa_db::DbPool;

/// Outcome of reconciling one external identity.
#[derive(Debug)]
pub enum Reconciliation {
    /// The identity maps to this (possibly just created) user.
    Resolved(User),
    /// The store could not be written; no internal id is available.
    Degraded,
}

impl Reconciliation {
    /// The internal user id, if reconciliation succeeded.
    pub fn user_id(&self) -> Option<DbId> {
        match self {
            Reconciliation::Resolved(user) => Some(user.id),
            Reconciliation::Degraded => None,
        }
    }
}

/// Create or refresh the user for `identity` and return its internal id.
///
/// This is a write on every call (profile fields are refreshed even when
/// unchanged) and is idempotent for identical input. Store failures are
/// logged and absorbed into [`Reconciliation::Degraded`]; they never fail
/// the caller.
pub async fn reconcile(pool: &DbPool, identity: &ExternalIdentity) -> Reconciliation {
    match UserRepo::upsert_by_email(pool, identity).await {
        Ok(user) => {
            tracing::debug!(user_id = user.id, "Identity reconciled");
            Reconciliation::Resolved(user)
        }
        Err(err) => {
            tracing::warn!(
                error = %err,
                "Identity reconciliation failed; continuing without storage identity",
            );
            Reconciliation::Degraded
        }
    }
}
