//! Splits appointment records into the "Upcoming" and "Past" tabs.
//!
//! Membership is recomputed on every call from `now`; nothing is stored.
//! A scheduled session whose calendar date has gone by lands in `past`
//! without anyone changing its status.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::models::appointment::{AppointmentPartition, AppointmentRecord, AppointmentStatus};

/// Parse a transport date into a calendar date.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 (normalised to UTC), and naive
/// `YYYY-MM-DDTHH:MM:SS[.f]` timestamps.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc).date_naive());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|ts| ts.date())
}

fn is_upcoming(status: AppointmentStatus, date: NaiveDate, today: NaiveDate) -> bool {
    status == AppointmentStatus::Scheduled && date >= today
}

/// Partition `records` against `now`.
///
/// Every record ends up in exactly one bucket. `upcoming` is soonest first,
/// `past` is most recent first; records sharing a date keep their input
/// order. Fails with `InvalidArgument` if any date cannot be parsed.
pub fn partition(
    records: Vec<AppointmentRecord>,
    now: DateTime<Utc>,
) -> AppResult<AppointmentPartition> {
    let today = now.date_naive();

    let mut dated = Vec::with_capacity(records.len());
    for record in records {
        let date = parse_calendar_date(&record.date).ok_or_else(|| {
            let id = record
                .id()
                .map(|id| id.to_string())
                .unwrap_or_else(|| "without id".into());
            AppError::InvalidArgument(format!(
                "appointment {} has an unparseable date {:?}",
                id, record.date
            ))
        })?;
        dated.push((date, record));
    }

    let mut upcoming = Vec::new();
    let mut past = Vec::new();
    for (date, record) in dated {
        if is_upcoming(record.status, date, today) {
            upcoming.push((date, record));
        } else {
            past.push((date, record));
        }
    }

    upcoming.sort_by(|a, b| a.0.cmp(&b.0));
    past.sort_by(|a, b| b.0.cmp(&a.0));

    tracing::debug!(
        today = %today,
        upcoming = upcoming.len(),
        past = past.len(),
        "Partitioned appointments"
    );

    Ok(AppointmentPartition {
        upcoming: upcoming.into_iter().map(|(_, r)| r).collect(),
        past: past.into_iter().map(|(_, r)| r).collect(),
    })
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TabLabel {
    pub key: &'static str,
    pub label: String,
    pub count: usize,
}

/// Tab headers for the appointments view, e.g. `Upcoming (3)`.
pub fn tab_labels(partition: &AppointmentPartition) -> Vec<TabLabel> {
    vec![
        TabLabel {
            key: "upcoming",
            label: format!("Upcoming ({})", partition.upcoming.len()),
            count: partition.upcoming.len(),
        },
        TabLabel {
            key: "past",
            label: format!("Past ({})", partition.past.len()),
            count: partition.past.len(),
        },
    ]
}
