//! Repository for the `users` table.

use learndsa_core::identity::ExternalIdentity;
use sqlx::PgPool;

use crate::models::user::User;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, email, name, avatar_url, created_at, updated_at";

/// Provides identity-store operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a user for `identity.email`, or refresh the profile fields of the
    /// existing one, returning the stored row.
    ///
    /// Runs as one `INSERT .. ON CONFLICT (email) DO UPDATE`, so concurrent
    /// first logins for the same email converge on a single row. `name` and
    /// `avatar_url` are overwritten with the supplied values (including
    /// `NULL`); `id` is never touched on the update path.
    pub async fn upsert_by_email(
        pool: &PgPool,
        identity: &ExternalIdentity,
    ) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (email, name, avatar_url)
             VALUES ($1, $2, $3)
             ON CONFLICT (email) DO UPDATE SET
                name = EXCLUDED.name,
                avatar_url = EXCLUDED.avatar_url,
                updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&identity.email)
            .bind(&identity.name)
            .bind(&identity.avatar_url)
            .fetch_one(pool)
            .await
    }

    /// Total number of users, reported by the health probe.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
