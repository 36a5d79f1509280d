pub mod memory;
pub mod pool;
pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::mood_entry::MoodEntry;
use crate::services::dates::DayKey;

pub use memory::InMemoryMoodStore;
pub use pool::create_pool;
pub use postgres::PgMoodStore;

/// Mood log persistence: at most one entry per (owner, day).
///
/// A missing entry is `Ok(None)`, never an error.
#[async_trait]
pub trait MoodStore: Send + Sync {
    async fn get(&self, owner_id: Uuid, day: DayKey) -> AppResult<Option<MoodEntry>>;

    /// Entries with `start <= day <= end`, newest first.
    async fn list_range(&self, owner_id: Uuid, start: DayKey, end: DayKey) -> AppResult<Vec<MoodEntry>>;

    /// Every entry for the owner, newest first.
    async fn list_all(&self, owner_id: Uuid) -> AppResult<Vec<MoodEntry>>;

    /// Insert the day's entry or overwrite its rating. A `None` note keeps
    /// whatever note is already stored.
    async fn upsert(
        &self,
        owner_id: Uuid,
        day: DayKey,
        rating: i32,
        note: Option<String>,
    ) -> AppResult<MoodEntry>;

    async fn ping(&self) -> AppResult<()>;
}
