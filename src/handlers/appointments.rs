use axum::{
    extract::{Query, State},
    Extension, Json,
};
use chrono::{DateTime, Utc};

use crate::auth::middleware::AuthToken;
use crate::dto::{AppointmentsQuery, AppointmentsResponse};
use crate::error::{AppError, AppResult};
use crate::services::temporal_partitioner::{parse_calendar_date, partition, tab_labels};
use crate::AppState;

pub async fn list_appointments(
    State(state): State<AppState>,
    Extension(token): Extension<AuthToken>,
    Query(query): Query<AppointmentsQuery>,
) -> AppResult<Json<AppointmentsResponse>> {
    // Read the clock once so both tabs agree on "today".
    let now = match query.now.as_deref() {
        Some(raw) => parse_now(raw)?,
        None => Utc::now(),
    };

    let records = state.upstream.list_appointments(token.as_str()).await?;
    let split = partition(records, now)?;
    let tabs = tab_labels(&split);

    Ok(Json(AppointmentsResponse {
        upcoming: split.upcoming,
        past: split.past,
        tabs,
    }))
}

fn parse_now(raw: &str) -> AppResult<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw.trim()) {
        return Ok(ts.with_timezone(&Utc));
    }
    parse_calendar_date(raw)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|ts| ts.and_utc())
        .ok_or_else(|| AppError::InvalidArgument(format!("now must be a date, got {:?}", raw)))
}
