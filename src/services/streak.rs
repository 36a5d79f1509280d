use std::collections::{BTreeSet, HashSet};

use serde::Serialize;

use crate::models::mood_entry::MoodPoint;
use crate::services::dates::{days_between, DayKey};

/// Lookback bound for the current streak. A year is a product limit, not a
/// property of the data: longer runs are reported as 365.
pub const MAX_STREAK_DAYS: u32 = 365;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreakSummary {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub active_days: u32,
    pub last_logged: Option<DayKey>,
}

/// Consecutive logged days ending at the most recent entry, provided that
/// entry is today or yesterday. Several entries on one day count once.
pub fn compute_streak(points: &[MoodPoint], today: DayKey) -> u32 {
    let Some(most_recent) = points.iter().map(|p| p.day).max() else {
        return 0;
    };

    if days_between(today, most_recent) > 1 {
        return 0;
    }

    let days: HashSet<DayKey> = points.iter().map(|p| p.day).collect();

    let mut streak = 1;
    let mut cursor = most_recent;
    while streak < MAX_STREAK_DAYS {
        match cursor.pred_opt() {
            Some(prev) if days.contains(&prev) => {
                streak += 1;
                cursor = prev;
            }
            _ => break,
        }
    }

    streak
}

/// Longest run of consecutive logged days anywhere in the history.
pub fn longest_streak(points: &[MoodPoint]) -> u32 {
    let days: BTreeSet<DayKey> = points.iter().map(|p| p.day).collect();

    let mut longest = 0u32;
    let mut run = 0u32;
    let mut prev: Option<DayKey> = None;

    for day in days {
        run = match prev {
            Some(p) if days_between(day, p) == 1 => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        prev = Some(day);
    }

    longest
}

pub fn summarize(points: &[MoodPoint], today: DayKey) -> StreakSummary {
    let active_days = points.iter().map(|p| p.day).collect::<HashSet<_>>().len() as u32;

    StreakSummary {
        current_streak: compute_streak(points, today),
        longest_streak: longest_streak(points),
        active_days,
        last_logged: points.iter().map(|p| p.day).max(),
    }
}
