use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::MoodStore;
use crate::error::AppResult;
use crate::models::mood_entry::MoodEntry;
use crate::services::dates::DayKey;

#[derive(Clone)]
pub struct PgMoodStore {
    db: PgPool,
}

impl PgMoodStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MoodStore for PgMoodStore {
    async fn get(&self, owner_id: Uuid, day: DayKey) -> AppResult<Option<MoodEntry>> {
        let entry = sqlx::query_as::<_, MoodEntry>(
            "SELECT * FROM mood_entries WHERE owner_id = $1 AND day = $2",
        )
        .bind(owner_id)
        .bind(day)
        .fetch_optional(&self.db)
        .await?;

        Ok(entry)
    }

    async fn list_range(&self, owner_id: Uuid, start: DayKey, end: DayKey) -> AppResult<Vec<MoodEntry>> {
        let entries = sqlx::query_as::<_, MoodEntry>(
            r#"
            SELECT * FROM mood_entries
            WHERE owner_id = $1 AND day BETWEEN $2 AND $3
            ORDER BY day DESC
            "#,
        )
        .bind(owner_id)
        .bind(start)
        .bind(end)
        .fetch_all(&self.db)
        .await?;

        Ok(entries)
    }

    async fn list_all(&self, owner_id: Uuid) -> AppResult<Vec<MoodEntry>> {
        let entries = sqlx::query_as::<_, MoodEntry>(
            "SELECT * FROM mood_entries WHERE owner_id = $1 ORDER BY day DESC",
        )
        .bind(owner_id)
        .fetch_all(&self.db)
        .await?;

        Ok(entries)
    }

    async fn upsert(
        &self,
        owner_id: Uuid,
        day: DayKey,
        rating: i32,
        note: Option<String>,
    ) -> AppResult<MoodEntry> {
        let entry = sqlx::query_as::<_, MoodEntry>(
            r#"
            INSERT INTO mood_entries (id, owner_id, day, rating, note)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (owner_id, day) DO UPDATE SET
                rating = EXCLUDED.rating,
                note = COALESCE(EXCLUDED.note, mood_entries.note),
                updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(owner_id)
        .bind(day)
        .bind(rating)
        .bind(&note)
        .fetch_one(&self.db)
        .await?;

        Ok(entry)
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.db)
            .await?;
        Ok(())
    }
}
