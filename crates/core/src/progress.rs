//! Progress ledger rules: upsert validation and completion summaries.
//!
//! Time spent on a topic only ever grows. Each write carries a delta that is
//! added to the stored total by the store itself; the `completed` flag, when
//! supplied, overwrites the stored value outright (so `false` un-completes).

use serde::Serialize;

use crate::error::CoreError;
use crate::validation::{require_text, MAX_KEY_LENGTH};

/// Largest `timeSpent` delta accepted in one write (one day, in seconds).
pub const MAX_TIME_SPENT_DELTA: i64 = 86_400;

/// Validate a progress write and resolve the time delta to apply.
///
/// `topic_id`, `topic_type` and `category` are required. A missing delta
/// means "no time spent" and resolves to `0`; a negative delta would shrink
/// the accumulated total and is rejected, as is one above
/// [`MAX_TIME_SPENT_DELTA`].
pub fn validate_upsert(
    topic_id: Option<&str>,
    topic_type: Option<&str>,
    category: Option<&str>,
    time_spent_delta: Option<i64>,
) -> Result<i64, CoreError> {
    require_text("topicId", topic_id, MAX_KEY_LENGTH)?;
    require_text("topicType", topic_type, MAX_KEY_LENGTH)?;
    require_text("category", category, MAX_KEY_LENGTH)?;

    let delta = time_spent_delta.unwrap_or(0);
    if delta < 0 {
        return Err(CoreError::Validation(format!(
            "timeSpent must not be negative (got {delta})"
        )));
    }
    if delta > MAX_TIME_SPENT_DELTA {
        return Err(CoreError::Validation(format!(
            "timeSpent must be at most {MAX_TIME_SPENT_DELTA} seconds per visit"
        )));
    }
    Ok(delta)
}

// ---------------------------------------------------------------------------
// Summaries
// ---------------------------------------------------------------------------

/// Completion figures for one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub category: String,
    pub completed: i64,
    pub total: i64,
    pub percentage: f64,
}

/// Completion figures across a user's whole progress ledger.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummary {
    pub completed: i64,
    pub total: i64,
    pub percentage: f64,
    pub categories: Vec<CategorySummary>,
}

/// Percentage of `completed` over `total`, `0.0` for an empty total.
pub fn completion_percentage(completed: i64, total: i64) -> f64 {
    if total <= 0 {
        return 0.0;
    }
    completed as f64 / total as f64 * 100.0
}

/// Fold per-category `(category, completed, total)` tallies into a summary.
///
/// Categories are sorted by name so the output is stable regardless of the
/// order the tallies arrive in.
pub fn summarize<I>(tallies: I) -> ProgressSummary
where
    I: IntoIterator<Item = (String, i64, i64)>,
{
    let mut categories: Vec<CategorySummary> = tallies
        .into_iter()
        .map(|(category, completed, total)| CategorySummary {
            category,
            completed,
            total,
            percentage: completion_percentage(completed, total),
        })
        .collect();
    categories.sort_by(|a, b| a.category.cmp(&b.category));

    let completed = categories.iter().map(|c| c.completed).sum();
    let total = categories.iter().map(|c| c.total).sum();

    ProgressSummary {
        completed,
        total,
        percentage: completion_percentage(completed, total),
        categories,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn missing_delta_resolves_to_zero() {
        let delta = validate_upsert(Some("arrays-intro"), Some("section"), Some("arrays"), None);
        assert_eq!(delta.unwrap(), 0);
    }

    #[test]
    fn positive_delta_is_passed_through() {
        let delta = validate_upsert(Some("arrays-intro"), Some("section"), Some("arrays"), Some(45));
        assert_eq!(delta.unwrap(), 45);
    }

    #[test]
    fn negative_delta_is_rejected() {
        assert_matches!(
            validate_upsert(Some("arrays-intro"), Some("section"), Some("arrays"), Some(-1)),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn oversized_delta_is_rejected() {
        assert_eq!(
            validate_upsert(Some("t"), Some("section"), Some("arrays"), Some(MAX_TIME_SPENT_DELTA))
                .unwrap(),
            MAX_TIME_SPENT_DELTA
        );
        assert_matches!(
            validate_upsert(Some("t"), Some("section"), Some("arrays"), Some(MAX_TIME_SPENT_DELTA + 1)),
            Err(CoreError::Validation(msg)) if msg.contains("at most")
        );
        assert_matches!(
            validate_upsert(Some("t"), Some("section"), Some("arrays"), Some(i64::MAX)),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn missing_topic_id_is_rejected() {
        assert_matches!(
            validate_upsert(None, Some("section"), Some("arrays"), Some(5)),
            Err(CoreError::Validation(msg)) if msg.contains("topicId")
        );
        assert_matches!(
            validate_upsert(Some(""), Some("section"), Some("arrays"), Some(5)),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn missing_topic_type_or_category_is_rejected() {
        assert!(validate_upsert(Some("t"), None, Some("arrays"), None).is_err());
        assert!(validate_upsert(Some("t"), Some("section"), Some(" "), None).is_err());
    }

    #[test]
    fn percentage_of_empty_total_is_zero() {
        assert_eq!(completion_percentage(0, 0), 0.0);
    }

    #[test]
    fn percentage_is_scaled_to_hundred() {
        assert_eq!(completion_percentage(1, 4), 25.0);
        assert_eq!(completion_percentage(3, 3), 100.0);
    }

    #[test]
    fn summarize_empty_ledger() {
        let summary = summarize(Vec::new());
        assert_eq!(summary.completed, 0);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.percentage, 0.0);
        assert!(summary.categories.is_empty());
    }

    #[test]
    fn summarize_sorts_categories_and_sums_totals() {
        let summary = summarize(vec![
            ("trees".to_string(), 1, 4),
            ("arrays".to_string(), 2, 2),
        ]);

        assert_eq!(summary.completed, 3);
        assert_eq!(summary.total, 6);
        assert_eq!(summary.percentage, 50.0);

        let names: Vec<&str> = summary.categories.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(names, ["arrays", "trees"]);
        assert_eq!(summary.categories[0].percentage, 100.0);
        assert_eq!(summary.categories[1].percentage, 25.0);
    }

    #[test]
    fn summary_serializes_camel_case() {
        let json = serde_json::to_value(summarize(vec![("arrays".to_string(), 1, 2)])).unwrap();
        assert_eq!(json["completed"], 1);
        assert_eq!(json["categories"][0]["category"], "arrays");
        assert_eq!(json["categories"][0]["percentage"], 50.0);
    }
}
