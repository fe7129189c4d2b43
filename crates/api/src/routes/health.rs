use std::time::Duration;

use axum::extract::State;
use axum::{routing::get, Json, Router};
use learndsa_db::repositories::UserRepo;
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// `"ok"`, or `"degraded"` when the database probe failed or timed out.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the database is reachable.
    pub db_healthy: bool,
    /// Number of reconciled users; `None` when the database is unhealthy.
    pub user_count: Option<i64>,
}

/// GET /health -- returns service and database health.
///
/// The probe is bounded by `HEALTH_CHECK_TIMEOUT_SECS`; a hung database
/// reports `degraded` instead of holding the request open.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let limit = Duration::from_secs(state.config.health_check_timeout_secs);

    let probe = async {
        learndsa_db::health_check(&state.pool).await?;
        UserRepo::count(&state.pool).await
    };

    let user_count = match tokio::time::timeout(limit, probe).await {
        Ok(Ok(count)) => Some(count),
        Ok(Err(err)) => {
            tracing::warn!(error = %err, "Database health probe failed");
            None
        }
        Err(_) => {
            tracing::warn!(timeout_secs = limit.as_secs(), "Database health probe timed out");
            None
        }
    };

    let db_healthy = user_count.is_some();
    let status = if db_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        user_count,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
