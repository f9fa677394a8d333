//! Time utilities: parsing HH:MM and building local timestamps.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

/// Combine a calendar date and a wall-clock time in the local timezone.
/// Ambiguous times (DST fold) resolve to the earlier instant; times that do
/// not exist (DST gap) are rejected.
pub fn local_datetime(date: NaiveDate, time: NaiveTime) -> AppResult<DateTime<Local>> {
    Local
        .from_local_datetime(&date.and_time(time))
        .earliest()
        .ok_or_else(|| AppError::InvalidTime(format!("{} {} does not exist locally", date, time)))
}

/// Parse `HH:MM` on `date` into a local timestamp.
pub fn parse_local(date: NaiveDate, time: &str) -> AppResult<DateTime<Local>> {
    let t = parse_time(time).ok_or_else(|| AppError::InvalidTime(time.to_string()))?;
    local_datetime(date, t)
}
