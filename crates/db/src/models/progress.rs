//! Progress ledger models and DTOs.

use learndsa_core::error::CoreError;
use learndsa_core::progress::validate_upsert;
use learndsa_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `user_progress` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    pub id: DbId,
    pub user_id: DbId,
    pub topic_id: String,
    pub topic_type: String,
    pub category: String,
    pub completed: bool,
    pub time_spent_seconds: i64,
    pub last_visited: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Per-category completion counts, as aggregated by the store.
#[derive(Debug, Clone, FromRow)]
pub struct CategoryTally {
    pub category: String,
    pub completed: i64,
    pub total: i64,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// Body of `POST /progress`.
///
/// Every field is optional at the wire level so that a missing `topicId`
/// is reported as a validation error rather than a JSON rejection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertProgress {
    pub topic_id: Option<String>,
    pub topic_type: Option<String>,
    pub category: Option<String>,
    pub completed: Option<bool>,
    /// Seconds spent since the last ping; added to the stored total.
    pub time_spent: Option<i64>,
}

/// A validated progress write, ready for [`crate::repositories::ProgressRepo::upsert`].
#[derive(Debug, Clone)]
pub struct ProgressWrite {
    pub topic_id: String,
    pub topic_type: String,
    pub category: String,
    /// `Some` overwrites the stored flag; `None` leaves it (or `false` on insert).
    pub completed: Option<bool>,
    pub time_spent_delta: i64,
}

impl UpsertProgress {
    /// Validate the payload and turn it into a [`ProgressWrite`].
    pub fn into_write(self) -> Result<ProgressWrite, CoreError> {
        let time_spent_delta = validate_upsert(
            self.topic_id.as_deref(),
            self.topic_type.as_deref(),
            self.category.as_deref(),
            self.time_spent,
        )?;

        Ok(ProgressWrite {
            topic_id: self.topic_id.unwrap_or_default(),
            topic_type: self.topic_type.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            completed: self.completed,
            time_spent_delta,
        })
    }
}
