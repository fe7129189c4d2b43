//! Route definitions for the progress ledger.

use axum::routing::get;
use axum::Router;

use crate::handlers::progress;
use crate::state::AppState;

/// Progress routes mounted at `/progress`.
///
/// ```text
/// GET  /         -> list_progress
/// POST /         -> upsert_progress
/// GET  /summary  -> progress_summary
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(progress::list_progress).post(progress::upsert_progress),
        )
        .route("/summary", get(progress::progress_summary))
}
