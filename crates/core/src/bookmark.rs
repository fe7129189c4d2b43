//! Bookmark ledger rules.
//!
//! Bookmarks have no update path: creating one for a topic the user already
//! bookmarked is a conflict, and removal is an explicit delete.

use crate::error::CoreError;
use crate::validation::{require_text, MAX_KEY_LENGTH};

/// Maximum length for a bookmark title (characters).
pub const MAX_TITLE_LENGTH: usize = 500;
/// Maximum length for a bookmark URL (characters).
pub const MAX_URL_LENGTH: usize = 2048;

/// Validate every field of a new bookmark. All five are required.
pub fn validate_create(
    topic_id: Option<&str>,
    topic_type: Option<&str>,
    category: Option<&str>,
    title: Option<&str>,
    url: Option<&str>,
) -> Result<(), CoreError> {
    require_text("topicId", topic_id, MAX_KEY_LENGTH)?;
    require_text("topicType", topic_type, MAX_KEY_LENGTH)?;
    require_text("category", category, MAX_KEY_LENGTH)?;
    require_text("title", title, MAX_TITLE_LENGTH)?;
    require_text("url", url, MAX_URL_LENGTH)?;
    Ok(())
}

/// Validate the `topicId` of a delete request.
pub fn validate_delete(topic_id: Option<&str>) -> Result<(), CoreError> {
    require_text("topicId", topic_id, MAX_KEY_LENGTH)
}
