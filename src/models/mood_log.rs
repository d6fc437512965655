use serde::{Deserialize, Serialize};

/// Mood label derived from a 1-10 intensity. Stored by the external API in
/// the `mood` field of a mood log.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MoodCategory {
    Sad,
    Anxious,
    Stressed,
    Okay,
    Good,
    Amazing,
}

impl MoodCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sad => "sad",
            Self::Anxious => "anxious",
            Self::Stressed => "stressed",
            Self::Okay => "okay",
            Self::Good => "good",
            Self::Amazing => "amazing",
        }
    }
}

impl std::fmt::Display for MoodCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body sent to the external API when a mood is logged. `mood` is always
/// `classify(intensity)`; there is no way to set it independently.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MoodLogEntry {
    pub intensity: u8,
    pub mood: MoodCategory,
    pub emotions: Vec<String>,
    pub activities: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
