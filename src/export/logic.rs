use super::fs_utils::{ensure_parent_dir, ensure_writable};
use super::model::EntryExport;
use super::{ExportFormat, csv, json, notify_export_success};
use crate::errors::AppResult;
use crate::models::time_entry::TimeEntry;
use crate::ui::messages::warning;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export `entries` (already filtered and ordered by the caller) to `file`.
    /// Returns the number of rows written; nothing is written for an empty set.
    pub fn export<'a, I>(entries: I, format: ExportFormat, file: &Path, force: bool) -> AppResult<usize>
    where
        I: IntoIterator<Item = &'a TimeEntry>,
    {
        let rows: Vec<EntryExport> = entries.into_iter().map(EntryExport::from).collect();

        if rows.is_empty() {
            warning("No time entries in the selected range. Nothing to export.");
            return Ok(0);
        }

        ensure_writable(file, force)?;
        ensure_parent_dir(file)?;

        match format {
            ExportFormat::Csv => csv::write_csv(file, &rows)?,
            ExportFormat::Json => json::write_json(file, &rows)?,
        }

        tracing::info!(format = format.as_str(), rows = rows.len(), path = %file.display(), "export written");
        notify_export_success(&format.as_str().to_uppercase(), rows.len(), file);
        Ok(rows.len())
    }
}
