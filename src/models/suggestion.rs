use serde::{Deserialize, Serialize};

/// Suggestion the external API may attach to a mood-log-create response.
/// Never generated locally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuggestionPayload {
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayDecision {
    Hidden,
    Show(SuggestionPayload),
}

impl DisplayDecision {
    pub fn payload(&self) -> Option<&SuggestionPayload> {
        match self {
            Self::Show(payload) => Some(payload),
            Self::Hidden => None,
        }
    }
}

/// Wire shape of a [`DisplayDecision`]: `{ "show": bool, "suggestion"?: {...} }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuggestionDisplay {
    pub show: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub suggestion: Option<SuggestionPayload>,
}

impl From<DisplayDecision> for SuggestionDisplay {
    fn from(decision: DisplayDecision) -> Self {
        match decision {
            DisplayDecision::Hidden => Self {
                show: false,
                suggestion: None,
            },
            DisplayDecision::Show(payload) => Self {
                show: true,
                suggestion: Some(payload),
            },
        }
    }
}
