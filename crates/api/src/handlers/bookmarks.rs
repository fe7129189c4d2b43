//! Handlers for the bookmark ledger.
//!
//! Bookmarks are create-or-conflict and delete-or-not-found; there is no
//! update. Clients treat `NOT_FOUND` on delete as already removed.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use learndsa_core::bookmark::validate_delete;
use learndsa_core::error::CoreError;
use learndsa_db::models::bookmark::CreateBookmark;
use learndsa_db::repositories::bookmark_repo::UNIQUE_USER_TOPIC;
use learndsa_db::repositories::BookmarkRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppQuery};
use crate::middleware::session::SessionUser;
use crate::response::SuccessResponse;
use crate::state::AppState;

/// Query parameters for `DELETE /bookmarks`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteBookmarkParams {
    pub topic_id: Option<String>,
}

/// Returns `true` if `err` is the duplicate-key violation on `(user_id, topic_id)`.
fn is_duplicate_bookmark(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.code().as_deref() == Some("23505")
                && db_err.constraint() == Some(UNIQUE_USER_TOPIC)
        }
        _ => false,
    }
}

/// GET /api/v1/bookmarks
///
/// List the caller's bookmarks, newest first.
pub async fn list_bookmarks(
    user: SessionUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let bookmarks = BookmarkRepo::list_for_user(&state.pool, user.user_id).await?;
    Ok(Json(bookmarks))
}

/// POST /api/v1/bookmarks
///
/// Bookmark a topic. Fails with 500 `CONFLICT` if the topic is already
/// bookmarked.
pub async fn create_bookmark(
    user: SessionUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateBookmark>,
) -> AppResult<impl IntoResponse> {
    let new = input.into_new().map_err(AppError::WriteRejected)?;

    let bookmark = BookmarkRepo::create(&state.pool, user.user_id, &new)
        .await
        .map_err(|err| {
            if is_duplicate_bookmark(&err) {
                AppError::Core(CoreError::Conflict(format!(
                    "Topic '{}' is already bookmarked",
                    new.topic_id
                )))
            } else {
                AppError::Database(err)
            }
        })?;

    tracing::info!(
        user_id = user.user_id,
        topic_id = %bookmark.topic_id,
        "Bookmark created",
    );

    Ok(Json(bookmark))
}

/// DELETE /api/v1/bookmarks?topicId=...
///
/// Remove a bookmark. Fails with 400 without `topicId` and 500 `NOT_FOUND`
/// if the topic is not bookmarked.
pub async fn delete_bookmark(
    user: SessionUser,
    State(state): State<AppState>,
    AppQuery(params): AppQuery<DeleteBookmarkParams>,
) -> AppResult<impl IntoResponse> {
    validate_delete(params.topic_id.as_deref())?;
    let topic_id = params.topic_id.unwrap_or_default();

    let deleted = BookmarkRepo::delete(&state.pool, user.user_id, &topic_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Bookmark",
            key: topic_id,
        }));
    }

    tracing::info!(user_id = user.user_id, topic_id = %topic_id, "Bookmark deleted");

    Ok(Json(SuccessResponse::ok()))
}
