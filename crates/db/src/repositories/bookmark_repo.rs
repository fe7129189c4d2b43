//! Repository for the `bookmarks` table.

use learndsa_core::types::DbId;
use sqlx::PgPool;

use crate::models::bookmark::{BookmarkRecord, NewBookmark};

/// Column list for `bookmarks` queries.
const COLUMNS: &str = "id, user_id, topic_id, topic_type, category, title, url, created_at";

/// Name of the unique constraint a duplicate bookmark violates.
pub const UNIQUE_USER_TOPIC: &str = "uq_bookmarks_user_topic";

/// Provides data access for the bookmark ledger.
pub struct BookmarkRepo;

impl BookmarkRepo {
    /// List a user's bookmarks, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<BookmarkRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM bookmarks \
             WHERE user_id = $1 \
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, BookmarkRecord>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Insert a bookmark.
    ///
    /// No `ON CONFLICT` clause: bookmarking a topic twice
    /// fails with a unique violation on [`UNIQUE_USER_TOPIC`].
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &NewBookmark,
    ) -> Result<BookmarkRecord, sqlx::Error> {
        let query = format!(
            "INSERT INTO bookmarks (user_id, topic_id, topic_type, category, title, url) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BookmarkRecord>(&query)
            .bind(user_id)
            .bind(&input.topic_id)
            .bind(&input.topic_type)
            .bind(&input.category)
            .bind(&input.title)
            .bind(&input.url)
            .fetch_one(pool)
            .await
    }

    /// Delete the bookmark for one topic.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, user_id: DbId, topic_id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM bookmarks WHERE user_id = $1 AND topic_id = $2")
            .bind(user_id)
            .bind(topic_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
