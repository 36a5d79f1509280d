use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::MoodStore;
use crate::error::AppResult;
use crate::models::mood_entry::MoodEntry;
use crate::services::dates::DayKey;

/// Process-local store for development and tests. Data is lost on restart.
#[derive(Clone, Default)]
pub struct InMemoryMoodStore {
    entries: Arc<RwLock<BTreeMap<(Uuid, DayKey), MoodEntry>>>,
}

impl InMemoryMoodStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MoodStore for InMemoryMoodStore {
    async fn get(&self, owner_id: Uuid, day: DayKey) -> AppResult<Option<MoodEntry>> {
        Ok(self.entries.read().await.get(&(owner_id, day)).cloned())
    }

    async fn list_range(&self, owner_id: Uuid, start: DayKey, end: DayKey) -> AppResult<Vec<MoodEntry>> {
        if start > end {
            return Ok(Vec::new());
        }
        let entries = self.entries.read().await;
        Ok(entries
            .range((owner_id, start)..=(owner_id, end))
            .rev()
            .map(|(_, e)| e.clone())
            .collect())
    }

    async fn list_all(&self, owner_id: Uuid) -> AppResult<Vec<MoodEntry>> {
        let entries = self.entries.read().await;
        Ok(entries
            .range((owner_id, DayKey::MIN)..=(owner_id, DayKey::MAX))
            .rev()
            .map(|(_, e)| e.clone())
            .collect())
    }

    async fn upsert(
        &self,
        owner_id: Uuid,
        day: DayKey,
        rating: i32,
        note: Option<String>,
    ) -> AppResult<MoodEntry> {
        let mut entries = self.entries.write().await;
        let now = Utc::now();

        let entry = entries
            .entry((owner_id, day))
            .and_modify(|e| {
                e.rating = rating;
                if note.is_some() {
                    e.note = note.clone();
                }
                e.updated_at = now;
            })
            .or_insert_with(|| MoodEntry {
                id: Uuid::new_v4(),
                owner_id,
                day,
                rating,
                note: note.clone(),
                created_at: now,
                updated_at: now,
            });

        Ok(entry.clone())
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}
