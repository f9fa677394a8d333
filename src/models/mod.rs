pub mod settings;
pub mod time_entry;
pub mod week_summary;
