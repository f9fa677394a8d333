use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One logged shift. Never mutated after creation; removed by id.
/// Serialized as `{id, startTime, endTime}` with RFC 3339 timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    pub id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl TimeEntry {
    /// New entry with a freshly generated id.
    pub fn new<Tz: TimeZone>(start: DateTime<Tz>, end: DateTime<Tz>) -> Self {
        Self::with_id(Uuid::new_v4(), start, end)
    }

    pub fn with_id<Tz: TimeZone>(id: Uuid, start: DateTime<Tz>, end: DateTime<Tz>) -> Self {
        Self {
            id,
            start_time: start.with_timezone(&Utc),
            end_time: end.with_timezone(&Utc),
        }
    }

    /// Length of the shift in seconds. Negative when `end_time < start_time`.
    pub fn duration(&self) -> f64 {
        (self.end_time - self.start_time).num_milliseconds() as f64 / 1000.0
    }

    pub fn hours(&self) -> f64 {
        self.duration() / 3600.0
    }

    pub fn local_start(&self) -> DateTime<Local> {
        self.start_time.with_timezone(&Local)
    }

    pub fn local_end(&self) -> DateTime<Local> {
        self.end_time.with_timezone(&Local)
    }

    /// First 8 hex digits of the id, as shown by `list`.
    pub fn short_id(&self) -> String {
        self.id.simple().to_string()[..8].to_string()
    }
}
