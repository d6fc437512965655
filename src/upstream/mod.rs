//! Boundary to the external ZEN-MIND REST API, which is the system of record
//! for mood logs and appointments.

pub mod http;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{AppError, AppResult};
use crate::models::appointment::AppointmentRecord;
use crate::models::mood_log::MoodLogEntry;
use crate::models::suggestion::SuggestionPayload;

/// Body of a successful mood-log-create call: the stored record plus an
/// optional suggestion.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CreatedMoodLog {
    #[serde(default)]
    pub suggestion: Option<SuggestionPayload>,
    #[serde(flatten)]
    pub record: Map<String, Value>,
}

/// Check a caller-supplied identifier before it becomes a path segment of an
/// upstream URL. Empty, `.` and `..` would address a different resource.
pub fn resource_id(id: &str) -> AppResult<&str> {
    match id {
        "" | "." | ".." => Err(AppError::InvalidArgument(format!(
            "{:?} is not a valid identifier",
            id
        ))),
        _ => Ok(id),
    }
}

/// Calls made against the external API. Every call forwards the caller's
/// bearer token; the API does its own authentication.
#[async_trait]
pub trait Upstream: Send + Sync {
    async fn create_mood_log(&self, token: &str, entry: &MoodLogEntry)
        -> AppResult<CreatedMoodLog>;

    async fn list_mood_logs(&self, token: &str) -> AppResult<Vec<Value>>;

    async fn delete_mood_log(&self, token: &str, id: &str) -> AppResult<()>;

    async fn list_appointments(&self, token: &str) -> AppResult<Vec<AppointmentRecord>>;

    /// Cheap reachability probe for readiness checks.
    async fn ping(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_created_mood_log_splits_suggestion() {
        let created: CreatedMoodLog = serde_json::from_value(json!({
            "_id": "665f",
            "mood": "sad",
            "intensity": 2,
            "suggestion": {
                "icon": "phone",
                "title": "Reach out",
                "type": "social",
                "description": "Text a friend you trust.",
            },
        }))
        .unwrap();

        let suggestion = created.suggestion.unwrap();
        assert_eq!(suggestion.kind, "social");
        assert_eq!(created.record.get("_id"), Some(&json!("665f")));
        assert!(!created.record.contains_key("suggestion"));
    }

    #[test]
    fn test_resource_id_rejects_relative_segments() {
        for bad in ["", ".", ".."] {
            assert!(matches!(resource_id(bad), Err(AppError::InvalidArgument(_))));
        }
        assert_eq!(resource_id("665f").unwrap(), "665f");
        assert_eq!(resource_id("../x").unwrap(), "../x");
    }

    #[test]
    fn test_created_mood_log_null_suggestion() {
        let created: CreatedMoodLog =
            serde_json::from_value(json!({ "mood": "good", "suggestion": null })).unwrap();
        assert!(created.suggestion.is_none());
        assert_eq!(created.record.len(), 1);
    }
}
