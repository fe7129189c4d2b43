//! Route definitions for the bookmark ledger.

use axum::routing::get;
use axum::Router;

use crate::handlers::bookmarks;
use crate::state::AppState;

/// Bookmark routes mounted at `/bookmarks`.
///
/// ```text
/// GET    /              -> list_bookmarks
/// POST   /              -> create_bookmark
/// DELETE /?topicId=...  -> delete_bookmark
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(bookmarks::list_bookmarks)
            .post(bookmarks::create_bookmark)
            .delete(bookmarks::delete_bookmark),
    )
}
