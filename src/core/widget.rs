//! Read-only weekly summary for the home-screen widget.
//!
//! The provider never shares memory with a `TimeManager`: every snapshot
//! reloads the persisted keys and recomputes through the same calculator.

use crate::core::calculator;
use crate::core::entry_store::EntryStore;
use crate::core::settings_store::SettingsStore;
use crate::storage::KeyValueStore;
use crate::utils::clock::{Clock, SystemClock};
use chrono::{DateTime, Local, TimeDelta};
use serde::Serialize;

pub const REFRESH_INTERVAL_MINUTES: u32 = 30;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WidgetSnapshot {
    pub date: DateTime<Local>,
    pub week: String,
    pub hours_worked: f64,
    pub hours_remaining: f64,
    pub net_earnings: f64,
    pub progress: f64,
    /// When the consumer should recompute.
    pub next_refresh: DateTime<Local>,
}

pub struct SummaryProvider<S, C = SystemClock> {
    store: S,
    clock: C,
    refresh_minutes: u32,
}

impl<S: KeyValueStore> SummaryProvider<S> {
    pub fn new(store: S) -> Self {
        Self::with_clock(store, SystemClock)
    }
}

impl<S: KeyValueStore, C: Clock> SummaryProvider<S, C> {
    pub fn with_clock(store: S, clock: C) -> Self {
        Self {
            store,
            clock,
            refresh_minutes: REFRESH_INTERVAL_MINUTES,
        }
    }

    /// Override the refresh cadence; zero is bumped to one minute.
    pub fn refresh_every(mut self, minutes: u32) -> Self {
        self.refresh_minutes = minutes.max(1);
        self
    }

    pub fn refresh_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(u64::from(self.refresh_minutes) * 60)
    }

    /// Sample values shown before the first real snapshot.
    pub fn placeholder(&self) -> WidgetSnapshot {
        let now = self.clock.now();
        WidgetSnapshot {
            date: now,
            week: String::new(),
            hours_worked: 25.5,
            hours_remaining: 14.5,
            net_earnings: 459.0,
            progress: calculator::weekly_progress(25.5),
            next_refresh: now + TimeDelta::minutes(i64::from(self.refresh_minutes)),
        }
    }

    pub fn snapshot(&self) -> WidgetSnapshot {
        let now = self.clock.now();
        let settings = SettingsStore::load(&self.store);
        let entries = EntryStore::load(&self.store);
        let summary = calculator::summarize(&entries, &settings, &now);

        WidgetSnapshot {
            date: now,
            week: summary.range.label(),
            hours_worked: summary.hours_worked,
            hours_remaining: summary.hours_remaining,
            net_earnings: summary.net_earnings,
            progress: summary.progress,
            next_refresh: now + TimeDelta::minutes(i64::from(self.refresh_minutes)),
        }
    }
}
