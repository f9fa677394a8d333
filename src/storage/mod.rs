//! Key-value storage port shared by the facade and the widget.
//!
//! Values are stored as text: scalars in their `Display` form, the entry
//! collection as a JSON array.

mod memory;

pub use memory::MemoryStore;

use crate::errors::AppResult;

pub const HOURLY_WAGE_KEY: &str = "hourlyWage";
pub const TAX_RATE_KEY: &str = "taxRate";
pub const WEEK_START_DAY_KEY: &str = "weekStartDay";
pub const TIME_ENTRIES_KEY: &str = "timeEntries";

pub trait KeyValueStore {
    /// `Ok(None)` when the key has never been written.
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Insert or overwrite `key`.
    fn set(&self, key: &str, value: &str) -> AppResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        (**self).set(key, value)
    }
}
