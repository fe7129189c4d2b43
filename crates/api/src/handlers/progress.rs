//! Handlers for the progress ledger.
//!
//! Progress rows are created on the first visit to a topic and updated on
//! every later one. There is no delete endpoint.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use learndsa_core::progress::summarize;
use learndsa_db::models::progress::UpsertProgress;
use learndsa_db::repositories::ProgressRepo;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::session::SessionUser;
use crate::state::AppState;

/// GET /api/v1/progress
///
/// List the caller's progress records, most recently visited first.
/// An empty ledger is an empty array, not an error.
pub async fn list_progress(
    user: SessionUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let records = ProgressRepo::list_for_user(&state.pool, user.user_id).await?;
    Ok(Json(records))
}

/// POST /api/v1/progress
///
/// Record a visit to a topic: accumulate `timeSpent` and, when supplied,
/// overwrite `completed`. Returns the resulting record.
pub async fn upsert_progress(
    user: SessionUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<UpsertProgress>,
) -> AppResult<impl IntoResponse> {
    let write = input.into_write().map_err(AppError::WriteRejected)?;

    let record = ProgressRepo::upsert(&state.pool, user.user_id, &write).await?;

    tracing::info!(
        user_id = user.user_id,
        topic_id = %record.topic_id,
        completed = record.completed,
        time_spent_seconds = record.time_spent_seconds,
        "Progress recorded",
    );

    Ok(Json(record))
}

/// GET /api/v1/progress/summary
///
/// Completion totals overall and per category.
pub async fn progress_summary(
    user: SessionUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let tallies = ProgressRepo::tally_by_category(&state.pool, user.user_id).await?;

    let summary = summarize(
        tallies
            .into_iter()
            .map(|t| (t.category, t.completed, t.total)),
    );

    Ok(Json(summary))
}
