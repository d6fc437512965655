//! Mood intensity → category mapping.
//!
//! The threshold table is skewed toward positive labels on purpose:
//! 1-4 cover sad/anxious/stressed, 5-10 cover okay/good/amazing. Keep the
//! boundaries exactly as they are.

use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::models::mood_log::MoodCategory;

pub const MIN_INTENSITY: u8 = 1;
pub const MAX_INTENSITY: u8 = 10;

/// Clamp any integer onto the 1-10 slider scale.
pub fn clamp_intensity(intensity: i64) -> u8 {
    intensity.clamp(MIN_INTENSITY as i64, MAX_INTENSITY as i64) as u8
}

/// Classify an intensity. Out-of-range values are clamped first, so every
/// integer maps to a category.
pub fn classify(intensity: i64) -> MoodCategory {
    let intensity = clamp_intensity(intensity);

    // First match wins.
    if intensity <= 2 {
        MoodCategory::Sad
    } else if intensity <= 3 {
        MoodCategory::Anxious
    } else if intensity <= 4 {
        MoodCategory::Stressed
    } else if intensity == 5 {
        MoodCategory::Okay
    } else if intensity <= 7 {
        MoodCategory::Good
    } else {
        // 8-9 and 10 both land here.
        MoodCategory::Amazing
    }
}

/// Read an intensity out of raw JSON and clamp it to `[1, 10]`.
///
/// Accepts integers, floats with no fractional part, and strings holding an
/// integer. Anything else is `InvalidArgument`.
pub fn intensity_from_json(value: &Value) -> AppResult<u8> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(clamp_intensity(i))
            } else if n.as_u64().is_some() {
                // Larger than i64::MAX, so above the scale.
                Ok(MAX_INTENSITY)
            } else {
                let f = n.as_f64().unwrap_or(f64::NAN);
                if f.is_finite() && f.fract() == 0.0 {
                    Ok(clamp_intensity(f.clamp(i64::MIN as f64, i64::MAX as f64) as i64))
                } else {
                    Err(AppError::InvalidArgument(format!(
                        "intensity must be an integer, got {}",
                        n
                    )))
                }
            }
        }
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map(clamp_intensity)
            .map_err(|_| {
                AppError::InvalidArgument(format!("intensity must be an integer, got {:?}", s))
            }),
        other => Err(AppError::InvalidArgument(format!(
            "intensity must be an integer, got {}",
            json_kind(other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
