use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::services::dates::DayKey;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct MoodEntry {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub day: DayKey,
    pub rating: i32,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Read-only (day, rating) snapshot consumed by the streak and aggregation code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoodPoint {
    pub day: DayKey,
    pub rating: i32,
}

impl MoodPoint {
    pub fn new(day: DayKey, rating: i32) -> Self {
        Self { day, rating }
    }
}

impl From<&MoodEntry> for MoodPoint {
    fn from(entry: &MoodEntry) -> Self {
        Self::new(entry.day, entry.rating)
    }
}

pub fn to_points(entries: &[MoodEntry]) -> Vec<MoodPoint> {
    entries.iter().map(MoodPoint::from).collect()
}

/// Entry as returned to clients, with its edit state resolved against today.
#[derive(Debug, Serialize)]
pub struct MoodEntryResponse {
    #[serde(flatten)]
    pub entry: MoodEntry,
    pub locked: bool,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpsertMoodRequest {
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i32,

    #[validate(length(max = 500, message = "Note must be at most 500 characters"))]
    pub note: Option<String>,

    /// Defaults to today; any other day is rejected.
    pub day: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct MoodRangeQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct WeekQuery {
    pub week_of: Option<NaiveDate>,
}
