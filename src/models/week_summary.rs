use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// Half-open `[start, end)` window of one tracking week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeekRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub first_day: NaiveDate,
    /// Inclusive 7th day, `first_day + 6`.
    pub last_day: NaiveDate,
}

impl WeekRange {
    /// `"Sep 1 - Sep 7"`
    pub fn label(&self) -> String {
        format!(
            "{} - {}",
            crate::utils::date::short_label(self.first_day),
            crate::utils::date::short_label(self.last_day)
        )
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WeekSummary {
    pub range: WeekRange,
    pub entries: usize,
    pub hours_worked: f64,
    pub hours_remaining: f64,
    pub progress: f64,
    pub gross_earnings: f64,
    pub net_earnings: f64,
}
