use chrono::TimeDelta;
use shifttrack::core::widget::REFRESH_INTERVAL_MINUTES;
use shifttrack::core::{SummaryProvider, TimeManager};
use shifttrack::errors::AppError;
use shifttrack::models::settings::WeekStartDay;
use shifttrack::storage::{KeyValueStore, MemoryStore, TIME_ENTRIES_KEY};
use shifttrack::utils::clock::FixedClock;

mod common;
use common::{assert_close, local, wednesday_noon};

fn manager(store: &MemoryStore) -> TimeManager<MemoryStore, FixedClock> {
    TimeManager::with_clock(store.clone(), FixedClock(wednesday_noon()))
}

#[test]
fn test_empty_store_loads_defaults() {
    let m = manager(&MemoryStore::new());

    assert_eq!(m.settings().hourly_wage, 20.0);
    assert_eq!(m.settings().tax_rate, 0.12);
    assert_eq!(m.settings().week_start_day.number(), 1);
    assert!(m.entries().is_empty());
    assert_eq!(m.hours_worked_this_week(), 0.0);
    assert_eq!(m.hours_remaining_this_week(), 40.0);
}

#[test]
fn test_single_eight_hour_shift() {
    let mut m = manager(&MemoryStore::new());
    m.add_time_entry(local(2025, 9, 1, 9, 0), local(2025, 9, 1, 17, 0))
        .unwrap();

    assert_close(m.hours_worked_this_week(), 8.0);
    assert_close(m.gross_earnings_this_week(), 160.0);
    assert_close(m.net_earnings_this_week(), 140.8);
    assert_close(m.weekly_hours_progress(), 0.2);
}

#[test]
fn test_two_shifts_in_current_week() {
    let mut m = manager(&MemoryStore::new());
    m.add_time_entry(local(2025, 9, 1, 9, 0), local(2025, 9, 1, 17, 0))
        .unwrap();
    m.add_time_entry(local(2025, 9, 2, 9, 0), local(2025, 9, 2, 14, 30))
        .unwrap();

    assert_close(m.hours_worked_this_week(), 13.5);
    assert_close(m.hours_remaining_this_week(), 26.5);

    let summary = m.week_summary();
    assert_eq!(summary.entries, 2);
    assert_close(summary.hours_worked, 13.5);
    assert_close(summary.net_earnings, m.net_earnings_this_week());
}

#[test]
fn test_shift_outside_week_depends_on_week_start() {
    let mut m = manager(&MemoryStore::new());
    m.add_time_entry(local(2025, 9, 1, 9, 0), local(2025, 9, 1, 17, 0))
        .unwrap();
    // Sunday before
    m.add_time_entry(local(2025, 8, 31, 10, 0), local(2025, 8, 31, 12, 0))
        .unwrap();

    assert_close(m.hours_worked_this_week(), 8.0);
    assert_eq!(m.current_week_entries().len(), 1);

    m.update_settings(20.0, 0.12, WeekStartDay::new(7).unwrap())
        .unwrap();
    assert_close(m.hours_worked_this_week(), 10.0);
    assert_eq!(m.current_week_range_label(), "Aug 31 - Sep 6");
}

#[test]
fn test_week_range_label() {
    let m = manager(&MemoryStore::new());
    assert_eq!(m.current_week_range_label(), "Sep 1 - Sep 7");
}

#[test]
fn test_add_rejects_non_positive_duration() {
    let store = MemoryStore::new();
    let mut m = manager(&store);

    let same = m.add_time_entry(local(2025, 9, 1, 9, 0), local(2025, 9, 1, 9, 0));
    assert!(matches!(same, Err(AppError::InvalidRange { .. })));

    let inverted = m.add_time_entry(local(2025, 9, 1, 17, 0), local(2025, 9, 1, 9, 0));
    assert!(matches!(inverted, Err(AppError::InvalidRange { .. })));

    assert!(m.entries().is_empty());
    assert_eq!(store.get(TIME_ENTRIES_KEY).unwrap(), None);
}

#[test]
fn test_entries_persist_newest_first() {
    let store = MemoryStore::new();
    let mut m = manager(&store);
    let a = m
        .add_time_entry(local(2025, 9, 2, 9, 0), local(2025, 9, 2, 10, 0))
        .unwrap();
    let b = m
        .add_time_entry(local(2025, 9, 4, 9, 0), local(2025, 9, 4, 10, 0))
        .unwrap();
    let c = m
        .add_time_entry(local(2025, 9, 1, 9, 0), local(2025, 9, 1, 10, 0))
        .unwrap();

    let reloaded = manager(&store);
    let ids: Vec<_> = reloaded.entries().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![b.id, a.id, c.id]);
}

#[test]
fn test_delete_unknown_entry_is_noop() {
    let store = MemoryStore::new();
    let mut m = manager(&store);
    m.add_time_entry(local(2025, 9, 1, 9, 0), local(2025, 9, 1, 17, 0))
        .unwrap();

    let removed = m.delete_by_id(uuid::Uuid::new_v4()).unwrap();

    assert!(!removed);
    assert_eq!(m.entries().len(), 1);
    assert_eq!(manager(&store).entries().len(), 1);
}

#[test]
fn test_delete_entry_persists() {
    let store = MemoryStore::new();
    let mut m = manager(&store);
    let entry = m
        .add_time_entry(local(2025, 9, 1, 9, 0), local(2025, 9, 1, 17, 0))
        .unwrap();

    assert!(m.delete_time_entry(&entry).unwrap());
    assert!(manager(&store).entries().is_empty());
}

#[test]
fn test_find_by_prefix() {
    let mut m = manager(&MemoryStore::new());
    let entry = m
        .add_time_entry(local(2025, 9, 1, 9, 0), local(2025, 9, 1, 17, 0))
        .unwrap();

    let found = m.find_by_prefix(&entry.short_id()).unwrap();
    assert_eq!(found.map(|e| e.id), Some(entry.id));

    let full = m.find_by_prefix(&entry.id.to_string()).unwrap();
    assert_eq!(full.map(|e| e.id), Some(entry.id));

    assert!(m.find_by_prefix("not-an-id").unwrap().is_none());
    assert!(m.find_by_prefix("ffffffff").unwrap().is_none());
}

#[test]
fn test_update_settings_rejects_out_of_range() {
    let mut m = manager(&MemoryStore::new());

    assert!(matches!(
        m.update_settings(20.0, 1.0, WeekStartDay::MONDAY),
        Err(AppError::InvalidSetting(_))
    ));
    assert!(matches!(
        m.update_settings(-1.0, 0.1, WeekStartDay::MONDAY),
        Err(AppError::InvalidSetting(_))
    ));
    assert_eq!(m.settings().tax_rate, 0.12);
}

#[test]
fn test_settings_input_falls_back_to_previous_values() {
    let store = MemoryStore::new();
    let mut m = manager(&store);
    m.update_settings(22.0, 0.1, WeekStartDay::MONDAY).unwrap();

    let outcome = m
        .update_settings_from_input(Some("twenty"), Some("15"), Some("sunday"))
        .unwrap();

    assert_eq!(outcome.settings.hourly_wage, 22.0);
    assert_close(outcome.settings.tax_rate, 0.15);
    assert_eq!(outcome.settings.week_start_day.number(), 7);
    assert_eq!(outcome.rejected.len(), 1);
    assert_eq!(outcome.rejected[0].0, "hourly wage");

    // persisted
    assert_eq!(*manager(&store).settings(), outcome.settings);
}

#[test]
fn test_settings_input_rejects_tax_of_hundred_percent() {
    let mut m = manager(&MemoryStore::new());

    let outcome = m
        .update_settings_from_input(None, Some("100"), Some("8"))
        .unwrap();

    assert_eq!(outcome.settings.tax_rate, 0.12);
    assert_eq!(outcome.settings.week_start_day.number(), 1);
    assert_eq!(outcome.rejected.len(), 2);
}

#[test]
fn test_reset_all_data() {
    let store = MemoryStore::new();
    let mut m = manager(&store);
    m.update_settings(35.0, 0.3, WeekStartDay::new(3).unwrap())
        .unwrap();
    m.add_time_entry(local(2025, 9, 1, 9, 0), local(2025, 9, 1, 17, 0))
        .unwrap();

    m.reset_all_data().unwrap();

    let reloaded = manager(&store);
    assert!(reloaded.entries().is_empty());
    assert_eq!(reloaded.settings().hourly_wage, 20.0);
    assert_eq!(reloaded.settings().tax_rate, 0.12);
    assert_eq!(reloaded.settings().week_start_day.number(), 1);
}

#[test]
fn test_widget_matches_manager() {
    let store = MemoryStore::new();
    let mut m = manager(&store);
    m.update_settings(25.0, 0.2, WeekStartDay::MONDAY).unwrap();
    m.add_time_entry(local(2025, 9, 1, 9, 0), local(2025, 9, 1, 17, 0))
        .unwrap();
    m.add_time_entry(local(2025, 9, 3, 8, 0), local(2025, 9, 3, 11, 30))
        .unwrap();
    m.add_time_entry(local(2025, 8, 29, 8, 0), local(2025, 8, 29, 16, 0))
        .unwrap();

    let provider = SummaryProvider::with_clock(store.clone(), FixedClock(wednesday_noon()));
    let snapshot = provider.snapshot();

    assert_close(snapshot.hours_worked, m.hours_worked_this_week());
    assert_close(snapshot.hours_remaining, m.hours_remaining_this_week());
    assert_close(snapshot.net_earnings, m.net_earnings_this_week());
    assert_close(snapshot.hours_worked, 11.5);
    assert_eq!(snapshot.week, "Sep 1 - Sep 7");
    assert_eq!(
        snapshot.next_refresh - snapshot.date,
        TimeDelta::minutes(i64::from(REFRESH_INTERVAL_MINUTES))
    );
}

#[test]
fn test_widget_sees_later_writes() {
    let store = MemoryStore::new();
    let provider = SummaryProvider::with_clock(store.clone(), FixedClock(wednesday_noon()));
    assert_eq!(provider.snapshot().hours_worked, 0.0);

    let mut m = manager(&store);
    m.add_time_entry(local(2025, 9, 2, 9, 0), local(2025, 9, 2, 13, 0))
        .unwrap();

    assert_close(provider.snapshot().hours_worked, 4.0);
}

#[test]
fn test_widget_placeholder_and_refresh_interval() {
    let provider = SummaryProvider::with_clock(MemoryStore::new(), FixedClock(wednesday_noon()))
        .refresh_every(15);

    let p = provider.placeholder();
    assert_eq!(p.hours_worked, 25.5);
    assert_eq!(p.hours_remaining, 14.5);
    assert_eq!(p.net_earnings, 459.0);
    assert_eq!(provider.refresh_interval().as_secs(), 15 * 60);
}
