use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
}

/// A booked therapy session as returned by the list-appointments call.
///
/// Only `date` and `status` drive partitioning. The identifier (`id`,
/// `_id` or both), therapist, time, session type, notes and anything else
/// the API adds ride along in `details` and are re-emitted under the keys
/// they arrived with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppointmentRecord {
    pub date: String,
    pub status: AppointmentStatus,
    #[serde(flatten)]
    pub details: serde_json::Map<String, serde_json::Value>,
}

impl AppointmentRecord {
    /// The record's identifier, preferring `id` over `_id`.
    pub fn id(&self) -> Option<&serde_json::Value> {
        self.details.get("id").or_else(|| self.details.get("_id"))
    }
}

/// Output of the upcoming/past split.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct AppointmentPartition {
    pub upcoming: Vec<AppointmentRecord>,
    pub past: Vec<AppointmentRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decodes_record_with_both_id_keys() {
        let record: AppointmentRecord = serde_json::from_value(json!({
            "_id": "665f",
            "id": "665f",
            "date": "2024-05-15",
            "status": "scheduled",
        }))
        .unwrap();

        assert_eq!(record.id(), Some(&json!("665f")));
        assert_eq!(record.status, AppointmentStatus::Scheduled);
    }

    #[test]
    fn test_id_keys_are_re_emitted_as_received() {
        let mongo = json!({
            "_id": "665f",
            "date": "2024-05-15",
            "status": "completed",
            "therapist": { "name": "Dr. Rivera" },
        });
        let record: AppointmentRecord = serde_json::from_value(mongo.clone()).unwrap();
        assert_eq!(record.id(), Some(&json!("665f")));
        assert_eq!(serde_json::to_value(&record).unwrap(), mongo);

        let plain = json!({ "id": 42, "date": "2024-05-15", "status": "cancelled" });
        let record: AppointmentRecord = serde_json::from_value(plain.clone()).unwrap();
        assert_eq!(record.id(), Some(&json!(42)));
        assert_eq!(serde_json::to_value(&record).unwrap(), plain);
    }

    #[test]
    fn test_record_without_id() {
        let record: AppointmentRecord =
            serde_json::from_value(json!({ "date": "2024-05-15", "status": "scheduled" })).unwrap();
        assert!(record.id().is_none());
    }
}
