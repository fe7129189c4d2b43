pub mod bookmarks;
pub mod health;
pub mod progress;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /session                  session view (verified identity)
///
/// /progress                 list, upsert (storage identity)
/// /progress/summary         completion totals (storage identity)
///
/// /bookmarks                list, create, delete?topicId= (storage identity)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/session", get(handlers::session::get_session))
        .nest("/progress", progress::router())
        .nest("/bookmarks", bookmarks::router())
}
