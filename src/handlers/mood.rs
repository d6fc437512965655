use axum::{
    extract::{Path, State},
    Extension, Json,
};

use crate::auth::middleware::AuthToken;
use crate::dto::{
    ClassifyRequest, ClassifyResponse, DeleteResponse, MoodLogRequest, MoodLogResponse,
};
use crate::error::AppResult;
use crate::services::mood_classifier::{classify, intensity_from_json};
use crate::services::suggestion_presenter::present;
use crate::upstream::resource_id;
use crate::AppState;

pub async fn create_mood_log(
    State(state): State<AppState>,
    Extension(token): Extension<AuthToken>,
    Json(body): Json<MoodLogRequest>,
) -> AppResult<Json<MoodLogResponse>> {
    let entry = body.into_entry()?;

    tracing::debug!(
        intensity = entry.intensity,
        mood = %entry.mood,
        emotions = entry.emotions.len(),
        activities = entry.activities.len(),
        "Logging mood"
    );

    let created = state.upstream.create_mood_log(token.as_str(), &entry).await?;
    let decision = present(created.suggestion);

    if let Some(suggestion) = decision.payload() {
        tracing::debug!(
            mood = %entry.mood,
            kind = %suggestion.kind,
            title = %suggestion.title,
            "Upstream attached a suggestion"
        );
    }

    Ok(Json(MoodLogResponse {
        mood: entry.mood,
        intensity: entry.intensity,
        log: created.record,
        suggestion: decision.into(),
    }))
}

pub async fn list_mood_logs(
    State(state): State<AppState>,
    Extension(token): Extension<AuthToken>,
) -> AppResult<Json<Vec<serde_json::Value>>> {
    let logs = state.upstream.list_mood_logs(token.as_str()).await?;
    Ok(Json(logs))
}

pub async fn delete_mood_log(
    State(state): State<AppState>,
    Extension(token): Extension<AuthToken>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResponse>> {
    state
        .upstream
        .delete_mood_log(token.as_str(), resource_id(&id)?)
        .await?;
    Ok(Json(DeleteResponse { deleted: true, id }))
}

/// Preview the category for a slider position without logging anything.
pub async fn classify_intensity(
    Json(body): Json<ClassifyRequest>,
) -> AppResult<Json<ClassifyResponse>> {
    let intensity = intensity_from_json(&body.intensity)?;
    Ok(Json(ClassifyResponse {
        intensity,
        mood: classify(intensity as i64),
    }))
}
