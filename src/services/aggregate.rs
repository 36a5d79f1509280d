use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::Duration;
use serde::Serialize;

use crate::models::mood_entry::MoodPoint;
use crate::services::dates::{days_in, DayKey};

/// One day's slot in a chart window. `average` is `None` when nothing was
/// logged, which is distinct from any real rating.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayBucket {
    pub day: DayKey,
    pub average: Option<f64>,
    pub entries: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyMoodReview {
    pub week_start: DayKey,
    pub week_end: DayKey,
    pub average: Option<f64>,
    pub logged_days: usize,
    pub best_day: Option<DayKey>,
    pub lowest_day: Option<DayKey>,
    pub buckets: Vec<DayBucket>,
}

/// A bucket for every day in `[start, end]`, oldest first.
pub fn bucket_by_day(points: &[MoodPoint], start: DayKey, end: DayKey) -> Vec<DayBucket> {
    let mut totals: HashMap<DayKey, (i64, usize)> = HashMap::new();
    for p in points.iter().filter(|p| p.day >= start && p.day <= end) {
        let slot = totals.entry(p.day).or_insert((0, 0));
        slot.0 += p.rating as i64;
        slot.1 += 1;
    }

    days_in(start, end)
        .map(|day| match totals.get(&day) {
            Some(&(sum, count)) => DayBucket {
                day,
                average: Some(sum as f64 / count as f64),
                entries: count,
            },
            None => DayBucket {
                day,
                average: None,
                entries: 0,
            },
        })
        .collect()
}

/// Mean rating over `[start, end]`, or `None` if nothing was logged.
pub fn weekly_average(points: &[MoodPoint], start: DayKey, end: DayKey) -> Option<f64> {
    let (sum, count) = points
        .iter()
        .filter(|p| p.day >= start && p.day <= end)
        .fold((0i64, 0usize), |(sum, count), p| (sum + p.rating as i64, count + 1));

    if count == 0 {
        None
    } else {
        Some(sum as f64 / count as f64)
    }
}

/// Seven-day review starting at `week_start`.
pub fn weekly_review(points: &[MoodPoint], week_start: DayKey) -> WeeklyMoodReview {
    let week_end = week_start + Duration::days(6);
    let buckets = bucket_by_day(points, week_start, week_end);

    let logged: Vec<(DayKey, f64)> = buckets
        .iter()
        .filter_map(|b| b.average.map(|avg| (b.day, avg)))
        .collect();

    // Ties resolve to the earliest day.
    let best_day = logged
        .iter()
        .fold(None::<(DayKey, f64)>, |best, &(day, avg)| match best {
            Some((_, b)) if avg.partial_cmp(&b) != Some(Ordering::Greater) => best,
            _ => Some((day, avg)),
        })
        .map(|(day, _)| day);
    let lowest_day = logged
        .iter()
        .fold(None::<(DayKey, f64)>, |low, &(day, avg)| match low {
            Some((_, l)) if avg.partial_cmp(&l) != Some(Ordering::Less) => low,
            _ => Some((day, avg)),
        })
        .map(|(day, _)| day);

    WeeklyMoodReview {
        week_start,
        week_end,
        average: weekly_average(points, week_start, week_end),
        logged_days: logged.len(),
        best_day,
        lowest_day,
        buckets,
    }
}
