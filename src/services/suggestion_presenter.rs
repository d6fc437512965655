use crate::models::suggestion::{DisplayDecision, SuggestionPayload};

/// Show the suggestion modal only when the API supplied a suggestion. The
/// payload is carried through as-is.
pub fn present(suggestion: Option<SuggestionPayload>) -> DisplayDecision {
    match suggestion {
        Some(payload) => DisplayDecision::Show(payload),
        None => DisplayDecision::Hidden,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::suggestion::SuggestionDisplay;
    use serde_json::json;

    #[test]
    fn test_absent_suggestion_is_hidden() {
        let decision = present(None);
        assert_eq!(decision, DisplayDecision::Hidden);
        assert!(decision.payload().is_none());
    }

    #[test]
    fn test_present_suggestion_passes_through_unchanged() {
        let payload = SuggestionPayload {
            icon: "🧘".into(),
            title: "Try a breathing break".into(),
            kind: "exercise".into(),
            description: "  Four slow breaths, in through the nose.  ".into(),
        };
        let decision = present(Some(payload.clone()));
        assert_eq!(decision.payload(), Some(&payload));
    }

    #[test]
    fn test_wire_shape() {
        let payload: SuggestionPayload = serde_json::from_value(json!({
            "icon": "music",
            "title": "Play a calm playlist",
            "type": "activity",
            "description": "",
        }))
        .unwrap();

        let shown = serde_json::to_value(SuggestionDisplay::from(present(Some(payload)))).unwrap();
        assert_eq!(
            shown,
            json!({
                "show": true,
                "suggestion": {
                    "icon": "music",
                    "title": "Play a calm playlist",
                    "type": "activity",
                    "description": "",
                }
            })
        );

        let hidden = serde_json::to_value(SuggestionDisplay::from(present(None))).unwrap();
        assert_eq!(hidden, json!({ "show": false }));
    }
}
