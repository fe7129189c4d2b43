//! Repository for the `user_progress` table.

use learndsa_core::types::DbId;
use sqlx::PgPool;

use crate::models::progress::{CategoryTally, ProgressRecord, ProgressWrite};

/// Column list for `user_progress` queries.
const COLUMNS: &str = "\
    id, user_id, topic_id, topic_type, category, completed, \
    time_spent_seconds, last_visited, created_at, updated_at";

/// Provides data access for the progress ledger.
pub struct ProgressRepo;

impl ProgressRepo {
    /// List a user's progress, most recently visited first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<ProgressRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM user_progress \
             WHERE user_id = $1 \
             ORDER BY last_visited DESC, id DESC"
        );
        sqlx::query_as::<_, ProgressRecord>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Record a visit to a topic, creating the row on first write.
    ///
    /// Uses `ON CONFLICT (user_id, topic_id) DO UPDATE` so the increment of
    /// `time_spent_seconds` happens under the row lock: concurrent writes for
    /// the same key serialize and none of their deltas is lost. On update,
    /// `completed` is overwritten only when supplied, and `topic_type` /
    /// `category` keep their first-written values.
    pub async fn upsert(
        pool: &PgPool,
        user_id: DbId,
        write: &ProgressWrite,
    ) -> Result<ProgressRecord, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_progress \
                 (user_id, topic_id, topic_type, category, completed, time_spent_seconds) \
             VALUES ($1, $2, $3, $4, COALESCE($5, false), $6) \
             ON CONFLICT (user_id, topic_id) DO UPDATE SET \
                 completed = COALESCE($5, user_progress.completed), \
                 time_spent_seconds = user_progress.time_spent_seconds + $6, \
                 last_visited = NOW(), \
                 updated_at = NOW() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProgressRecord>(&query)
            .bind(user_id)
            .bind(&write.topic_id)
            .bind(&write.topic_type)
            .bind(&write.category)
            .bind(write.completed)
            .bind(write.time_spent_delta)
            .fetch_one(pool)
            .await
    }

    /// Completed and total topic counts per category for one user.
    pub async fn tally_by_category(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<CategoryTally>, sqlx::Error> {
        sqlx::query_as::<_, CategoryTally>(
            "SELECT category, \
                    COUNT(*) FILTER (WHERE completed) AS completed, \
                    COUNT(*) AS total \
             FROM user_progress \
             WHERE user_id = $1 \
             GROUP BY category \
             ORDER BY category",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}
