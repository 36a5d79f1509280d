use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::mood_entry::{MoodEntry, MoodEntryResponse, MoodRangeQuery, UpsertMoodRequest};
use crate::services::dates::{self, DayKey};
use crate::AppState;

/// Log or overwrite today's mood. Past days are locked.
pub async fn upsert_mood(
    State(state): State<AppState>,
    Path(owner_id): Path<Uuid>,
    Json(body): Json<UpsertMoodRequest>,
) -> AppResult<Json<MoodEntryResponse>> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let day = check_writable(body.day, Utc::now(), &state.config.timezone)?;

    let entry = state
        .store
        .upsert(owner_id, day, body.rating, body.note)
        .await?;

    tracing::info!(owner_id = %owner_id, day = %day, rating = entry.rating, "Mood logged");

    Ok(Json(MoodEntryResponse {
        entry,
        locked: false,
    }))
}

pub async fn list_moods(
    State(state): State<AppState>,
    Path(owner_id): Path<Uuid>,
    Query(query): Query<MoodRangeQuery>,
) -> AppResult<Json<Vec<MoodEntryResponse>>> {
    let today = dates::today(&state.config.timezone);
    let start = query
        .start_date
        .unwrap_or_else(|| today - Duration::days(30));
    let end = query.end_date.unwrap_or(today);

    if start > end {
        return Err(AppError::Validation(
            "start_date must not be after end_date".into(),
        ));
    }

    let entries = state.store.list_range(owner_id, start, end).await?;

    Ok(Json(
        entries
            .into_iter()
            .map(|entry| with_lock_state(entry, today))
            .collect(),
    ))
}

pub async fn get_mood(
    State(state): State<AppState>,
    Path((owner_id, day)): Path<(Uuid, DayKey)>,
) -> AppResult<Json<MoodEntryResponse>> {
    let today = dates::today(&state.config.timezone);

    let entry = state
        .store
        .get(owner_id, day)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No mood logged for {}", day)))?;

    Ok(Json(with_lock_state(entry, today)))
}

/// Resolve the target day against a single clock reading. Only today is
/// writable: earlier days are locked, later ones rejected.
fn check_writable(day: Option<DayKey>, now: DateTime<Utc>, tz: &Tz) -> AppResult<DayKey> {
    let today = dates::to_day_key(now, tz);
    let day = day.unwrap_or(today);

    if dates::is_today_at(day, now, tz) {
        return Ok(day);
    }
    if dates::is_locked(day, today) {
        return Err(AppError::Locked(format!(
            "Mood for {} can no longer be changed",
            day
        )));
    }
    Err(AppError::Validation(
        "Cannot log a mood for a future day".into(),
    ))
}

fn with_lock_state(entry: MoodEntry, today: DayKey) -> MoodEntryResponse {
    let locked = dates::is_locked(entry.day, today);
    MoodEntryResponse { entry, locked }
}
