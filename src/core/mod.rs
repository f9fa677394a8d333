pub mod calculator;
pub mod config;
pub mod entry_store;
pub mod log;
pub mod manager;
pub mod settings_store;
pub mod widget;

pub use entry_store::EntryStore;
pub use manager::TimeManager;
pub use settings_store::SettingsStore;
pub use widget::SummaryProvider;
