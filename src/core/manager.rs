use crate::core::calculator;
use crate::core::entry_store::EntryStore;
use crate::core::settings_store::SettingsStore;
use crate::errors::{AppError, AppResult};
use crate::models::settings::{Settings, WeekStartDay};
use crate::models::time_entry::TimeEntry;
use crate::models::week_summary::{WeekRange, WeekSummary};
use crate::storage::KeyValueStore;
use crate::utils::clock::{Clock, SystemClock};
use chrono::{DateTime, TimeZone};
use uuid::Uuid;

/// Result of applying free-text settings input: what was saved, and which
/// fields kept their previous value because the text was rejected.
#[derive(Debug, Clone)]
pub struct SettingsInput {
    pub settings: Settings,
    pub rejected: Vec<(&'static str, String)>,
}

/// Facade over settings and entries. Owns the in-memory state; every
/// mutation is written through to the store, every query is recomputed.
pub struct TimeManager<S, C = SystemClock> {
    store: S,
    clock: C,
    settings: Settings,
    entries: Vec<TimeEntry>,
}

impl<S: KeyValueStore> TimeManager<S> {
    pub fn new(store: S) -> Self {
        Self::with_clock(store, SystemClock)
    }
}

impl<S: KeyValueStore, C: Clock> TimeManager<S, C> {
    pub fn with_clock(store: S, clock: C) -> Self {
        let settings = SettingsStore::load(&store);
        let entries = EntryStore::load(&store);
        tracing::debug!(entries = entries.len(), "time manager loaded");

        Self {
            store,
            clock,
            settings,
            entries,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// All entries, newest first.
    pub fn entries(&self) -> &[TimeEntry] {
        &self.entries
    }

    pub fn find(&self, id: Uuid) -> Option<&TimeEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Resolve a full id or a unique prefix of its hex form.
    /// `Ok(None)` when nothing matches, including text that is not hex.
    pub fn find_by_prefix(&self, input: &str) -> AppResult<Option<&TimeEntry>> {
        let needle = input.trim().to_ascii_lowercase();
        if let Ok(id) = Uuid::parse_str(&needle) {
            return Ok(self.find(id));
        }

        let needle = needle.replace('-', "");
        if needle.is_empty() || !needle.chars().all(|c| c.is_ascii_hexdigit()) {
            return Ok(None);
        }

        let mut matches = self
            .entries
            .iter()
            .filter(|e| e.id.simple().to_string().starts_with(&needle));

        match (matches.next(), matches.next()) {
            (Some(entry), None) => Ok(Some(entry)),
            (None, _) => Ok(None),
            (Some(_), Some(_)) => Err(AppError::AmbiguousId(input.to_string())),
        }
    }

    // ---------------------------------------------------------------------
    // Mutations
    // ---------------------------------------------------------------------

    /// Record a shift. Shifts that do not end after they start are rejected.
    pub fn add_time_entry<Tz: TimeZone>(
        &mut self,
        start: DateTime<Tz>,
        end: DateTime<Tz>,
    ) -> AppResult<TimeEntry> {
        let entry = TimeEntry::new(start, end);

        if entry.end_time <= entry.start_time {
            return Err(AppError::InvalidRange {
                start: entry.start_time.to_rfc3339(),
                end: entry.end_time.to_rfc3339(),
            });
        }

        EntryStore::append(&self.store, &mut self.entries, entry.clone())?;
        tracing::info!(id = %entry.id, hours = entry.hours(), "time entry added");
        Ok(entry)
    }

    pub fn delete_time_entry(&mut self, entry: &TimeEntry) -> AppResult<bool> {
        self.delete_by_id(entry.id)
    }

    /// Unknown ids are not an error; the return value says whether anything
    /// was deleted.
    pub fn delete_by_id(&mut self, id: Uuid) -> AppResult<bool> {
        let removed = EntryStore::remove(&self.store, &mut self.entries, id)?;
        tracing::info!(%id, removed, "delete time entry");
        Ok(removed)
    }

    pub fn update_settings(
        &mut self,
        hourly_wage: f64,
        tax_rate: f64,
        week_start_day: WeekStartDay,
    ) -> AppResult<()> {
        if !Settings::is_valid_wage(hourly_wage) {
            return Err(AppError::InvalidSetting(format!(
                "hourly wage must be a non-negative number, got {hourly_wage}"
            )));
        }
        if !Settings::is_valid_tax_rate(tax_rate) {
            return Err(AppError::InvalidSetting(format!(
                "tax rate must be in [0, 1), got {tax_rate}"
            )));
        }

        self.settings = Settings {
            hourly_wage,
            tax_rate,
            week_start_day,
        };
        SettingsStore::save(&self.store, &self.settings)
    }

    /// Apply settings typed by a user. The tax rate is entered as a
    /// percentage (`"12"` means 0.12). Each field that is absent keeps its
    /// value; each field that does not parse, or is out of range, also keeps
    /// its previous value and is reported in `rejected`.
    pub fn update_settings_from_input(
        &mut self,
        wage: Option<&str>,
        tax_percent: Option<&str>,
        week_start: Option<&str>,
    ) -> AppResult<SettingsInput> {
        let current = self.settings;
        let mut rejected = Vec::new();

        let hourly_wage = match wage {
            Some(text) => match text.trim().parse::<f64>() {
                Ok(w) if Settings::is_valid_wage(w) => w,
                _ => {
                    rejected.push(("hourly wage", text.to_string()));
                    current.hourly_wage
                }
            },
            None => current.hourly_wage,
        };

        let tax_rate = match tax_percent {
            Some(text) => match text.trim().trim_end_matches('%').trim().parse::<f64>() {
                Ok(p) if Settings::is_valid_tax_rate(p / 100.0) => p / 100.0,
                _ => {
                    rejected.push(("tax rate", text.to_string()));
                    current.tax_rate
                }
            },
            None => current.tax_rate,
        };

        let week_start_day = match week_start {
            Some(text) => WeekStartDay::parse(text).unwrap_or_else(|_| {
                rejected.push(("week start day", text.to_string()));
                current.week_start_day
            }),
            None => current.week_start_day,
        };

        self.update_settings(hourly_wage, tax_rate, week_start_day)?;

        Ok(SettingsInput {
            settings: self.settings,
            rejected,
        })
    }

    /// Default settings and no entries, both persisted.
    pub fn reset_all_data(&mut self) -> AppResult<()> {
        self.settings = Settings::default();
        self.entries.clear();

        SettingsStore::save(&self.store, &self.settings)?;
        EntryStore::save(&self.store, &self.entries)?;
        tracing::info!("all data reset");
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------------

    pub fn current_week_range(&self) -> WeekRange {
        calculator::week_range(&self.clock.now(), self.settings.week_start_day)
    }

    pub fn current_week_entries(&self) -> Vec<&TimeEntry> {
        let range = self.current_week_range();
        calculator::entries_in_range(&self.entries, range.start, range.end).collect()
    }

    pub fn week_summary(&self) -> WeekSummary {
        calculator::summarize(&self.entries, &self.settings, &self.clock.now())
    }

    pub fn hours_worked_this_week(&self) -> f64 {
        let range = self.current_week_range();
        calculator::hours_in_range(&self.entries, range.start, range.end)
    }

    pub fn hours_remaining_this_week(&self) -> f64 {
        calculator::hours_remaining(self.hours_worked_this_week())
    }

    pub fn weekly_hours_progress(&self) -> f64 {
        calculator::weekly_progress(self.hours_worked_this_week())
    }

    pub fn gross_earnings_this_week(&self) -> f64 {
        calculator::gross_earnings(self.hours_worked_this_week(), self.settings.hourly_wage)
    }

    pub fn net_earnings_this_week(&self) -> f64 {
        calculator::net_earnings(
            self.hours_worked_this_week(),
            self.settings.hourly_wage,
            self.settings.tax_rate,
        )
    }

    /// `"Sep 1 - Sep 7"`
    pub fn current_week_range_label(&self) -> String {
        self.current_week_range().label()
    }
}
