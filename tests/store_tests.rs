use chrono::{TimeZone, Utc};
use shifttrack::core::{EntryStore, SettingsStore};
use shifttrack::db::SqliteStore;
use shifttrack::errors::AppError;
use shifttrack::db::migrate::applied_migrations;
use shifttrack::models::settings::{Settings, WeekStartDay};
use shifttrack::models::time_entry::TimeEntry;
use shifttrack::storage::{
    HOURLY_WAGE_KEY, KeyValueStore, MemoryStore, TAX_RATE_KEY, TIME_ENTRIES_KEY,
    WEEK_START_DAY_KEY,
};
use std::collections::HashSet;
use uuid::Uuid;

mod common;
use common::setup_test_db;

fn shift(day: u32, from: u32, to: u32) -> TimeEntry {
    TimeEntry::new(
        Utc.with_ymd_and_hms(2025, 9, day, from, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2025, 9, day, to, 0, 0).unwrap(),
    )
}

// ---------------------------------------------------------------------------
// EntryStore
// ---------------------------------------------------------------------------

#[test]
fn test_entry_collection_round_trip() {
    let store = MemoryStore::new();
    let entries = vec![shift(3, 9, 17), shift(1, 8, 12), shift(2, 13, 18)];

    EntryStore::save(&store, &entries).unwrap();
    let loaded = EntryStore::load(&store);

    let ids = |v: &[TimeEntry]| v.iter().map(|e| e.id).collect::<HashSet<Uuid>>();
    assert_eq!(ids(&loaded), ids(&entries));
    for e in &entries {
        assert!(loaded.contains(e), "missing {:?}", e);
    }
}

#[test]
fn test_entries_json_uses_camel_case_keys() {
    let json = EntryStore::encode(&[shift(1, 9, 17)]).unwrap();
    assert!(json.contains("\"id\""));
    assert!(json.contains("\"startTime\":\"2025-09-01T09:00:00Z\""));
    assert!(json.contains("\"endTime\":\"2025-09-01T17:00:00Z\""));
}

#[test]
fn test_append_then_load_is_newest_first() {
    let store = MemoryStore::new();
    let mut entries = Vec::new();

    for e in [shift(2, 9, 17), shift(5, 9, 12), shift(1, 9, 17), shift(3, 7, 8)] {
        EntryStore::append(&store, &mut entries, e).unwrap();
    }

    let loaded = EntryStore::load(&store);
    let days: Vec<u32> = loaded
        .iter()
        .map(|e| chrono::Datelike::day(&e.start_time))
        .collect();
    assert_eq!(days, vec![5, 3, 2, 1]);
    assert_eq!(loaded, entries);
}

#[test]
fn test_load_missing_key_is_empty() {
    assert!(EntryStore::load(&MemoryStore::new()).is_empty());
}

#[test]
fn test_load_malformed_data_is_empty() {
    let store = MemoryStore::new();

    store.set(TIME_ENTRIES_KEY, "not json at all").unwrap();
    assert!(EntryStore::load(&store).is_empty());

    store.set(TIME_ENTRIES_KEY, r#"[{"id": 5}]"#).unwrap();
    assert!(EntryStore::load(&store).is_empty());
}

#[test]
fn test_remove_unknown_id_is_noop() {
    let store = MemoryStore::new();
    let mut entries = Vec::new();
    EntryStore::append(&store, &mut entries, shift(1, 9, 17)).unwrap();
    let before = store.get(TIME_ENTRIES_KEY).unwrap();

    let removed = EntryStore::remove(&store, &mut entries, Uuid::new_v4()).unwrap();

    assert!(!removed);
    assert_eq!(entries.len(), 1);
    assert_eq!(store.get(TIME_ENTRIES_KEY).unwrap(), before);
}

#[test]
fn test_remove_persists_remainder() {
    let store = MemoryStore::new();
    let mut entries = Vec::new();
    let keep = shift(1, 9, 17);
    let drop = shift(2, 9, 17);
    EntryStore::append(&store, &mut entries, keep.clone()).unwrap();
    EntryStore::append(&store, &mut entries, drop.clone()).unwrap();

    assert!(EntryStore::remove(&store, &mut entries, drop.id).unwrap());
    assert_eq!(EntryStore::load(&store), vec![keep]);
}

// ---------------------------------------------------------------------------
// SettingsStore
// ---------------------------------------------------------------------------

#[test]
fn test_settings_defaults_when_empty() {
    let s = SettingsStore::load(&MemoryStore::new());
    assert_eq!(s.hourly_wage, 20.0);
    assert_eq!(s.tax_rate, 0.12);
    assert_eq!(s.week_start_day.number(), 1);
}

#[test]
fn test_settings_partial_presence() {
    let store = MemoryStore::new();
    store.set(HOURLY_WAGE_KEY, "25.5").unwrap();

    let s = SettingsStore::load(&store);
    assert_eq!(s.hourly_wage, 25.5);
    assert_eq!(s.tax_rate, 0.12);
    assert_eq!(s.week_start_day, WeekStartDay::MONDAY);
}

#[test]
fn test_settings_removed_key_falls_back_to_default() {
    let store = MemoryStore::new();
    SettingsStore::save(
        &store,
        &Settings {
            hourly_wage: 30.0,
            tax_rate: 0.25,
            week_start_day: WeekStartDay::new(3).unwrap(),
        },
    )
    .unwrap();

    assert_eq!(store.remove(TAX_RATE_KEY).as_deref(), Some("0.25"));

    let s = SettingsStore::load(&store);
    assert_eq!(s.hourly_wage, 30.0);
    assert_eq!(s.tax_rate, 0.12);
    assert_eq!(s.week_start_day.number(), 3);
}

#[test]
fn test_settings_malformed_values_fall_back_per_key() {
    let store = MemoryStore::new();
    store.set(HOURLY_WAGE_KEY, "18").unwrap();
    store.set(TAX_RATE_KEY, "abc").unwrap();
    store.set(WEEK_START_DAY_KEY, "9").unwrap();

    let s = SettingsStore::load(&store);
    assert_eq!(s.hourly_wage, 18.0);
    assert_eq!(s.tax_rate, 0.12);
    assert_eq!(s.week_start_day.number(), 1);
}

#[test]
fn test_settings_save_then_load() {
    let store = MemoryStore::new();
    let settings = Settings {
        hourly_wage: 31.25,
        tax_rate: 0.2,
        week_start_day: WeekStartDay::new(7).unwrap(),
    };

    SettingsStore::save(&store, &settings).unwrap();

    assert_eq!(store.get(WEEK_START_DAY_KEY).unwrap().as_deref(), Some("7"));
    assert_eq!(SettingsStore::load(&store), settings);
}

// ---------------------------------------------------------------------------
// SqliteStore
// ---------------------------------------------------------------------------

#[test]
fn test_sqlite_store_get_set_overwrite() {
    let store = SqliteStore::in_memory("group.test").unwrap();

    assert_eq!(store.get("hourlyWage").unwrap(), None);
    store.set("hourlyWage", "20").unwrap();
    store.set("hourlyWage", "22.5").unwrap();

    assert_eq!(store.get("hourlyWage").unwrap().as_deref(), Some("22.5"));
    assert_eq!(store.keys().unwrap(), vec!["hourlyWage".to_string()]);
}

#[test]
fn test_sqlite_store_scopes_are_isolated_and_shared() {
    let db_path = setup_test_db("kv_scopes");

    let app = SqliteStore::open(&db_path, "group.a").unwrap();
    let other = SqliteStore::open(&db_path, "group.b").unwrap();
    app.set("taxRate", "0.3").unwrap();

    assert_eq!(other.get("taxRate").unwrap(), None);

    // a second reader of the same scope sees the write
    let widget = SqliteStore::open(&db_path, "group.a").unwrap();
    assert_eq!(widget.get("taxRate").unwrap().as_deref(), Some("0.3"));
}

#[test]
fn test_sqlite_migrations_run_once() {
    let db_path = setup_test_db("kv_migrations");

    let first = SqliteStore::open(&db_path, "group.a").unwrap();
    let applied = applied_migrations(first.conn()).unwrap();
    drop(first);

    let second = SqliteStore::open(&db_path, "group.a").unwrap();
    assert_eq!(applied_migrations(second.conn()).unwrap(), applied);
    assert_eq!(applied.len(), 2);
}

#[test]
fn test_entry_store_over_sqlite() {
    let store = SqliteStore::in_memory("group.test").unwrap();
    let mut entries = Vec::new();
    EntryStore::append(&store, &mut entries, shift(1, 9, 17)).unwrap();
    EntryStore::append(&store, &mut entries, shift(4, 9, 11)).unwrap();

    let loaded = EntryStore::load(&store);
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].hours(), 2.0);
}

#[test]
fn test_read_only_store_on_missing_file_reads_defaults() {
    let db_path = setup_test_db("store_read_only_missing");

    let reader = SqliteStore::open_read_only(&db_path, "group.shifttrack").unwrap();
    assert_eq!(reader.get(HOURLY_WAGE_KEY).unwrap(), None);
    assert!(EntryStore::load(&reader).is_empty());
    assert_eq!(SettingsStore::load(&reader), Settings::default());

    assert!(matches!(
        reader.set(HOURLY_WAGE_KEY, "30"),
        Err(AppError::ReadOnly(_))
    ));
    assert!(!std::path::Path::new(&db_path).exists());
}

#[test]
fn test_read_only_store_sees_main_app_writes() {
    let db_path = setup_test_db("store_read_only_shared");
    let writer = SqliteStore::open(&db_path, "group.shifttrack").unwrap();
    writer.set(HOURLY_WAGE_KEY, "27.5").unwrap();
    EntryStore::append(&writer, &mut Vec::new(), shift(2, 9, 17)).unwrap();

    let reader = SqliteStore::open_read_only(&db_path, "group.shifttrack").unwrap();
    assert_eq!(reader.get(HOURLY_WAGE_KEY).unwrap().as_deref(), Some("27.5"));
    assert_eq!(EntryStore::load(&reader).len(), 1);

    let other = SqliteStore::open_read_only(&db_path, "group.other").unwrap();
    assert_eq!(other.get(HOURLY_WAGE_KEY).unwrap(), None);
}
