//! Weekly aggregation over time entries. Everything here is pure; the facade
//! and the widget both go through `summarize` so they can never disagree.

pub mod earnings;
pub mod hours;
pub mod week;

pub use earnings::{gross_earnings, net_earnings};
pub use hours::{WEEKLY_HOURS_CAP, entries_in_range, hours_in_range, hours_remaining, weekly_progress};
pub use week::{week_bounds, week_range};

use crate::models::settings::Settings;
use crate::models::time_entry::TimeEntry;
use crate::models::week_summary::WeekSummary;
use chrono::{DateTime, TimeZone};

pub fn summarize<Tz: TimeZone>(
    entries: &[TimeEntry],
    settings: &Settings,
    reference: &DateTime<Tz>,
) -> WeekSummary {
    let range = week_range(reference, settings.week_start_day);
    let hours_worked = hours_in_range(entries, range.start, range.end);

    WeekSummary {
        range,
        entries: entries_in_range(entries, range.start, range.end).count(),
        hours_worked,
        hours_remaining: hours_remaining(hours_worked),
        progress: weekly_progress(hours_worked),
        gross_earnings: gross_earnings(hours_worked, settings.hourly_wage),
        net_earnings: net_earnings(hours_worked, settings.hourly_wage, settings.tax_rate),
    }
}
