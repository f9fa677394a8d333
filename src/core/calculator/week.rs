use crate::models::settings::WeekStartDay;
use crate::models::week_summary::WeekRange;
use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveTime, TimeDelta, TimeZone, Utc};

/// First and last (inclusive) day of the week containing `date`.
///
/// The week starts on the most recent day on or before `date` whose weekday
/// equals `week_start`, so `date` itself is always inside the result.
pub fn week_bounds(date: NaiveDate, week_start: WeekStartDay) -> (NaiveDate, NaiveDate) {
    let today = date.weekday().num_days_from_monday();
    let first = week_start.weekday().num_days_from_monday();
    let back = (today + 7 - first) % 7;

    let first_day = date - Days::new(back as u64);
    (first_day, first_day + Days::new(6))
}

/// Start of `date` in `tz`, as a UTC instant.
fn local_midnight<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> DateTime<Utc> {
    let midnight = date.and_time(NaiveTime::MIN);

    tz.from_local_datetime(&midnight)
        .earliest()
        // midnight skipped by a DST jump: the day begins an hour later
        .or_else(|| {
            tz.from_local_datetime(&(midnight + TimeDelta::hours(1)))
                .earliest()
        })
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| Utc.from_utc_datetime(&midnight))
}

/// Half-open window `[start, end)` of the week containing `reference`,
/// with both ends at local midnight of `reference`'s timezone.
pub fn week_range<Tz: TimeZone>(reference: &DateTime<Tz>, week_start: WeekStartDay) -> WeekRange {
    let tz = reference.timezone();
    let (first_day, last_day) = week_bounds(reference.date_naive(), week_start);

    WeekRange {
        start: local_midnight(&tz, first_day),
        end: local_midnight(&tz, first_day + Days::new(7)),
        first_day,
        last_day,
    }
}
