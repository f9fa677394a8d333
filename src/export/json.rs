use super::model::EntryExport;
use crate::errors::AppResult;
use std::path::Path;

/// Write entries as pretty-printed JSON.
pub(crate) fn write_json(path: &Path, rows: &[EntryExport]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(rows)?;
    std::fs::write(path, json)?;
    Ok(())
}
