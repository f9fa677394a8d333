use crate::errors::AppResult;
use crate::models::time_entry::TimeEntry;
use crate::storage::{KeyValueStore, TIME_ENTRIES_KEY};
use uuid::Uuid;

/// Whole-collection persistence of time entries under `timeEntries`.
/// Holds no state: the caller owns the in-memory vector.
pub struct EntryStore;

impl EntryStore {
    /// Missing key, unreadable storage or malformed JSON all yield an empty
    /// collection.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Vec<TimeEntry> {
        let raw = match store.get(TIME_ENTRIES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "could not read time entries, starting empty");
                return Vec::new();
            }
        };

        Self::decode(&raw).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "malformed time entries, starting empty");
            Vec::new()
        })
    }

    pub fn save<S: KeyValueStore + ?Sized>(store: &S, entries: &[TimeEntry]) -> AppResult<()> {
        store.set(TIME_ENTRIES_KEY, &Self::encode(entries)?)
    }

    /// Insert, re-sort newest first, persist everything.
    pub fn append<S: KeyValueStore + ?Sized>(
        store: &S,
        entries: &mut Vec<TimeEntry>,
        entry: TimeEntry,
    ) -> AppResult<()> {
        entries.push(entry);
        Self::sort_newest_first(entries);
        Self::save(store, entries)
    }

    /// Drop the entry with `id` and persist the rest. Returns whether an
    /// entry was removed; an unknown id changes nothing.
    pub fn remove<S: KeyValueStore + ?Sized>(
        store: &S,
        entries: &mut Vec<TimeEntry>,
        id: Uuid,
    ) -> AppResult<bool> {
        let before = entries.len();
        entries.retain(|e| e.id != id);
        if entries.len() == before {
            return Ok(false);
        }
        Self::save(store, entries)?;
        Ok(true)
    }

    pub fn sort_newest_first(entries: &mut [TimeEntry]) {
        entries.sort_by(|a, b| b.start_time.cmp(&a.start_time));
    }

    pub fn encode(entries: &[TimeEntry]) -> AppResult<String> {
        Ok(serde_json::to_string(entries)?)
    }

    pub fn decode(raw: &str) -> AppResult<Vec<TimeEntry>> {
        Ok(serde_json::from_str(raw)?)
    }
}
