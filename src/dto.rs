//! # ZEN-MIND gateway — Request/Response DTOs
//!
//! Conventions:
//! - `*Request`  → deserialized from client JSON body or query params
//! - `*Response` → serialized to client JSON
//! - Form constraints are expressed via `validator` derive macros

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::AppResult;
use crate::models::appointment::AppointmentRecord;
use crate::models::mood_log::{MoodCategory, MoodLogEntry};
use crate::models::suggestion::SuggestionDisplay;
use crate::services::mood_classifier::{classify, intensity_from_json};
use crate::services::temporal_partitioner::TabLabel;

// ============================================================================
// Common
// ============================================================================

/// Standard delete confirmation
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub deleted: bool,
    pub id: String,
}

// ============================================================================
// Mood
// ============================================================================

/// POST /api/mood
#[derive(Debug, Deserialize, Validate)]
pub struct MoodLogRequest {
    /// Slider value, 1-10. Kept as raw JSON so non-integers can be rejected
    /// with a precise message instead of a generic body rejection.
    #[serde(default)]
    pub intensity: serde_json::Value,

    #[serde(default)]
    #[validate(length(min = 1, message = "Select at least one emotion"))]
    pub emotions: Vec<String>,

    #[serde(default)]
    pub activities: Vec<String>,

    #[validate(length(max = 200, message = "Notes must be 200 characters or fewer"))]
    pub notes: Option<String>,
}

impl MoodLogRequest {
    /// Trim labels, drop blanks and duplicates (first occurrence wins), and
    /// turn blank notes into no notes.
    pub fn normalized(self) -> Self {
        Self {
            intensity: self.intensity,
            emotions: normalize_labels(self.emotions),
            activities: normalize_labels(self.activities),
            notes: self
                .notes
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty()),
        }
    }

    /// Normalize, validate, and build the entry sent to the external API.
    pub fn into_entry(self) -> AppResult<MoodLogEntry> {
        let form = self.normalized();
        let intensity = intensity_from_json(&form.intensity)?;
        form.validate()?;

        Ok(MoodLogEntry {
            intensity,
            mood: classify(intensity as i64),
            emotions: form.emotions,
            activities: form.activities,
            notes: form.notes,
        })
    }
}

fn normalize_labels(labels: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    labels
        .into_iter()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty() && seen.insert(l.clone()))
        .collect()
}

/// POST /api/mood/classify
#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    #[serde(default)]
    pub intensity: serde_json::Value,
}

/// Response for POST /api/mood/classify
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassifyResponse {
    /// Intensity after clamping to 1-10
    pub intensity: u8,
    pub mood: MoodCategory,
}

/// Response for POST /api/mood
#[derive(Debug, Serialize, Deserialize)]
pub struct MoodLogResponse {
    pub mood: MoodCategory,
    pub intensity: u8,

    /// Record echoed back by the external API
    pub log: serde_json::Map<String, serde_json::Value>,

    pub suggestion: SuggestionDisplay,
}

// ============================================================================
// Appointments
// ============================================================================

/// GET /api/appointments query params
#[derive(Debug, Deserialize)]
pub struct AppointmentsQuery {
    /// Pins "now" for this render. RFC 3339 or YYYY-MM-DD. Default: server clock.
    pub now: Option<String>,
}

/// Response for GET /api/appointments
#[derive(Debug, Serialize)]
pub struct AppointmentsResponse {
    pub upcoming: Vec<AppointmentRecord>,
    pub past: Vec<AppointmentRecord>,
    pub tabs: Vec<TabLabel>,
}

// ============================================================================
// System
// ============================================================================

/// GET /health
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

/// GET /readyz
#[derive(Debug, Serialize)]
pub struct ReadyzResponse {
    pub status: String,
    pub checks: ReadyzChecks,
}

#[derive(Debug, Serialize)]
pub struct ReadyzChecks {
    pub upstream: bool,
}
