use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Duration;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::mood_entry::{to_points, MoodRangeQuery, WeekQuery};
use crate::services::aggregate::{self, DayBucket, WeeklyMoodReview};
use crate::services::dates;
use crate::services::streak::{self, StreakSummary};
use crate::AppState;

/// Widest chart window served in one request.
const MAX_CHART_DAYS: i64 = 366;

pub async fn get_streak(
    State(state): State<AppState>,
    Path(owner_id): Path<Uuid>,
) -> AppResult<Json<StreakSummary>> {
    let today = dates::today(&state.config.timezone);
    let entries = state.store.list_all(owner_id).await?;

    Ok(Json(streak::summarize(&to_points(&entries), today)))
}

/// Per-day averages for charting; days without an entry are `null`.
pub async fn get_daily_buckets(
    State(state): State<AppState>,
    Path(owner_id): Path<Uuid>,
    Query(query): Query<MoodRangeQuery>,
) -> AppResult<Json<Vec<DayBucket>>> {
    let today = dates::today(&state.config.timezone);
    let start = query.start_date.unwrap_or_else(|| today - Duration::days(6));
    let end = query.end_date.unwrap_or(today);

    if start > end {
        return Err(AppError::Validation(
            "start_date must not be after end_date".into(),
        ));
    }
    if dates::days_between(end, start) >= MAX_CHART_DAYS {
        return Err(AppError::Validation(format!(
            "Window must be at most {} days",
            MAX_CHART_DAYS
        )));
    }

    let entries = state.store.list_range(owner_id, start, end).await?;

    Ok(Json(aggregate::bucket_by_day(&to_points(&entries), start, end)))
}

pub async fn get_weekly_review(
    State(state): State<AppState>,
    Path(owner_id): Path<Uuid>,
    Query(query): Query<WeekQuery>,
) -> AppResult<Json<WeeklyMoodReview>> {
    let today = dates::today(&state.config.timezone);
    let week_start = dates::week_start(query.week_of.unwrap_or(today));
    let week_end = week_start + Duration::days(6);

    let entries = state.store.list_range(owner_id, week_start, week_end).await?;

    Ok(Json(aggregate::weekly_review(&to_points(&entries), week_start)))
}
