//! Bookmark ledger models and DTOs.

use learndsa_core::bookmark::validate_create;
use learndsa_core::error::CoreError;
use learndsa_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `bookmarks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkRecord {
    pub id: DbId,
    pub user_id: DbId,
    pub topic_id: String,
    pub topic_type: String,
    pub category: String,
    pub title: String,
    pub url: String,
    pub created_at: Timestamp,
}

/// Body of `POST /bookmarks`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookmark {
    pub topic_id: Option<String>,
    pub topic_type: Option<String>,
    pub category: Option<String>,
    pub title: Option<String>,
    pub url: Option<String>,
}

/// A validated bookmark, ready for [`crate::repositories::BookmarkRepo::create`].
#[derive(Debug, Clone)]
pub struct NewBookmark {
    pub topic_id: String,
    pub topic_type: String,
    pub category: String,
    pub title: String,
    pub url: String,
}

impl CreateBookmark {
    /// Validate the payload and turn it into a [`NewBookmark`].
    pub fn into_new(self) -> Result<NewBookmark, CoreError> {
        validate_create(
            self.topic_id.as_deref(),
            self.topic_type.as_deref(),
            self.category.as_deref(),
            self.title.as_deref(),
            self.url.as_deref(),
        )?;

        Ok(NewBookmark {
            topic_id: self.topic_id.unwrap_or_default(),
            topic_type: self.topic_type.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            title: self.title.unwrap_or_default(),
            url: self.url.unwrap_or_default(),
        })
    }
}
