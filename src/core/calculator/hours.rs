use crate::models::time_entry::TimeEntry;
use chrono::{DateTime, Utc};

/// Fixed weekly cap used for remaining hours and progress.
pub const WEEKLY_HOURS_CAP: f64 = 40.0;

/// Entries whose `start_time` falls in `[start, end)`. An entry ending after
/// `end` still belongs entirely to the window it started in.
pub fn entries_in_range<'a>(
    entries: &'a [TimeEntry],
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> impl Iterator<Item = &'a TimeEntry> {
    entries
        .iter()
        .filter(move |e| e.start_time >= start && e.start_time < end)
}

pub fn hours_in_range(entries: &[TimeEntry], start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    let seconds: f64 = entries_in_range(entries, start, end)
        .map(TimeEntry::duration)
        .sum();
    seconds / 3600.0
}

pub fn hours_remaining(hours_worked: f64) -> f64 {
    (WEEKLY_HOURS_CAP - hours_worked).max(0.0)
}

/// Share of the cap already worked, clamped to `0..=1`.
pub fn weekly_progress(hours_worked: f64) -> f64 {
    (hours_worked / WEEKLY_HOURS_CAP).clamp(0.0, 1.0)
}
