//! Session façade extractors for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use learndsa_core::error::CoreError;
use learndsa_core::types::DbId;

use crate::auth::identity_token::{verify_identity_token, IdentityClaims};
use crate::auth::reconciler::{reconcile, Reconciliation};
use crate::error::AppError;
use crate::state::AppState;

/// The verified external identity carried by the request.
///
/// Rejects with 401 when the `Authorization: Bearer` token is missing or
/// fails verification. Does not touch the store.
#[derive(Debug, Clone)]
pub struct VerifiedIdentity(pub IdentityClaims);

impl FromRequestParts<AppState> for VerifiedIdentity {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = verify_identity_token(token, &state.config.identity).map_err(|err| {
            AppError::Core(CoreError::Unauthorized(format!(
                "Invalid or expired identity token: {err}"
            )))
        })?;

        Ok(VerifiedIdentity(claims))
    }
}

/// An internal user id usable for ledger operations.
///
/// Verifies the identity, then reconciles it against the identity store.
/// Handlers see exactly two outcomes: a usable id, or a 401 rejection. A
/// missing email and a degraded reconciliation both reject, even though the
/// identity itself verified.
///
/// ```ignore
/// async fn my_handler(user: SessionUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SessionUser {
    /// The user's internal database id.
    pub user_id: DbId,
}

impl FromRequestParts<AppState> for SessionUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let VerifiedIdentity(claims) = VerifiedIdentity::from_request_parts(parts, state).await?;

        let identity = claims.external_identity().ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Identity has no email; storage identity unavailable".into(),
            ))
        })?;

        match reconcile(&state.pool, &identity).await {
            Reconciliation::Resolved(user) => Ok(SessionUser { user_id: user.id }),
            Reconciliation::Degraded => Err(AppError::Core(CoreError::Unauthorized(
                "Storage identity unavailable".into(),
            ))),
        }
    }
}
