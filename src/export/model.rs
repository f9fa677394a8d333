// src/export/model.rs

use crate::models::time_entry::TimeEntry;
use serde::Serialize;

/// Flat row for exports: ids and timestamps plus local-time helpers.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct EntryExport {
    pub id: String,
    pub start_time: String,
    pub end_time: String,
    pub date: String,
    pub start: String,
    pub end: String,
    pub hours: f64,
}

impl From<&TimeEntry> for EntryExport {
    fn from(e: &TimeEntry) -> Self {
        let start = e.local_start();
        let end = e.local_end();
        Self {
            id: e.id.to_string(),
            start_time: e.start_time.to_rfc3339(),
            end_time: e.end_time.to_rfc3339(),
            date: start.format("%Y-%m-%d").to_string(),
            start: start.format("%H:%M").to_string(),
            end: end.format("%H:%M").to_string(),
            hours: (e.hours() * 100.0).round() / 100.0,
        }
    }
}

/// Header for CSV output.
pub(crate) fn get_headers() -> [&'static str; 7] {
    [
        "id",
        "start_time",
        "end_time",
        "date",
        "start",
        "end",
        "hours",
    ]
}

pub(crate) fn entry_to_row(e: &EntryExport) -> Vec<String> {
    vec![
        e.id.clone(),
        e.start_time.clone(),
        e.end_time.clone(),
        e.date.clone(),
        e.start.clone(),
        e.end.clone(),
        format!("{:.2}", e.hours),
    ]
}
