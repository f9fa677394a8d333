use crate::errors::AppResult;
use crate::models::settings::{Settings, WeekStartDay};
use crate::storage::{HOURLY_WAGE_KEY, KeyValueStore, TAX_RATE_KEY, WEEK_START_DAY_KEY};
use std::str::FromStr;

/// Scalar persistence of `Settings`, one key per field.
pub struct SettingsStore;

/// Read and parse one key; anything missing or unparsable is `None`.
fn read<S, T>(store: &S, key: &str) -> Option<T>
where
    S: KeyValueStore + ?Sized,
    T: FromStr,
{
    match store.get(key) {
        Ok(Some(raw)) => {
            let parsed = raw.trim().parse::<T>().ok();
            if parsed.is_none() {
                tracing::warn!(key, value = %raw, "ignoring unparsable setting");
            }
            parsed
        }
        Ok(None) => None,
        Err(e) => {
            tracing::warn!(key, error = %e, "could not read setting");
            None
        }
    }
}

impl SettingsStore {
    /// Each field independently falls back to its default.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Settings {
        let defaults = Settings::default();

        Settings {
            hourly_wage: read::<_, f64>(store, HOURLY_WAGE_KEY)
                .filter(|w| Settings::is_valid_wage(*w))
                .unwrap_or(defaults.hourly_wage),
            tax_rate: read::<_, f64>(store, TAX_RATE_KEY)
                .filter(|t| Settings::is_valid_tax_rate(*t))
                .unwrap_or(defaults.tax_rate),
            week_start_day: read::<_, u8>(store, WEEK_START_DAY_KEY)
                .and_then(WeekStartDay::new)
                .unwrap_or(defaults.week_start_day),
        }
    }

    /// Writes each key on its own; a failure part-way leaves earlier keys
    /// written.
    pub fn save<S: KeyValueStore + ?Sized>(store: &S, settings: &Settings) -> AppResult<()> {
        store.set(HOURLY_WAGE_KEY, &settings.hourly_wage.to_string())?;
        store.set(TAX_RATE_KEY, &settings.tax_rate.to_string())?;
        store.set(
            WEEK_START_DAY_KEY,
            &settings.week_start_day.number().to_string(),
        )?;
        Ok(())
    }
}
