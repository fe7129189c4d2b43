//! Session view: who the caller is, and whether they have storage identity.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use learndsa_core::types::DbId;
use serde::Serialize;

use crate::auth::reconciler::reconcile;
use crate::error::AppResult;
use crate::middleware::session::VerifiedIdentity;
use crate::state::AppState;

/// Body of `GET /session`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub email: Option<String>,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    /// `None` when the identity has no email or reconciliation degraded.
    pub user_id: Option<DbId>,
}

/// GET /api/v1/session
///
/// Succeeds for any verified identity. Reconciles when possible but never
/// fails on the store: a degraded reconciliation is reported as
/// `userId: null`.
pub async fn get_session(
    VerifiedIdentity(claims): VerifiedIdentity,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let identity = claims.external_identity();

    let user_id = match &identity {
        Some(identity) => reconcile(&state.pool, identity).await.user_id(),
        None => {
            tracing::debug!(sub = %claims.sub, "Identity has no email; skipping reconciliation");
            None
        }
    };

    let (email, name, avatar_url) = match identity {
        Some(identity) => (Some(identity.email), identity.name, identity.avatar_url),
        None => (None, claims.name, claims.picture),
    };

    Ok(Json(SessionResponse {
        email,
        name,
        avatar_url,
        user_id,
    }))
}
