//! Calendar-day keys.
//!
//! Every mood entry is keyed by the calendar day it was logged on in a single
//! reference timezone. Keys are never taken by slicing a UTC timestamp: an
//! entry made at 22:30 in New York is still "today" there even though UTC has
//! already rolled over.

use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc};

pub type DayKey = NaiveDate;

/// Collapse a point in time to its calendar day in `tz`.
pub fn to_day_key<Z: TimeZone>(timestamp: DateTime<Utc>, tz: &Z) -> DayKey {
    timestamp.with_timezone(tz).date_naive()
}

pub fn today<Z: TimeZone>(tz: &Z) -> DayKey {
    to_day_key(Utc::now(), tz)
}

/// Reads the clock. Callers that also need `today` should take one `now`
/// and use [`is_today_at`] so both agree across midnight.
#[allow(dead_code)]
pub fn is_today<Z: TimeZone>(day: DayKey, tz: &Z) -> bool {
    is_today_at(day, Utc::now(), tz)
}

pub fn is_today_at<Z: TimeZone>(day: DayKey, now: DateTime<Utc>, tz: &Z) -> bool {
    day == to_day_key(now, tz)
}

/// Signed whole days from `b` to `a`.
pub fn days_between(a: DayKey, b: DayKey) -> i64 {
    (a - b).num_days()
}

/// Entries for days strictly before today can no longer be edited.
pub fn is_locked(day: DayKey, today: DayKey) -> bool {
    day < today
}

/// Monday of the ISO week containing `day`.
pub fn week_start(day: DayKey) -> DayKey {
    day - Duration::days(day.weekday().num_days_from_monday() as i64)
}

/// Every day in `[start, end]`, oldest first. Empty when `start > end`.
pub fn days_in(start: DayKey, end: DayKey) -> impl Iterator<Item = DayKey> {
    start.iter_days().take_while(move |d| *d <= end)
}
