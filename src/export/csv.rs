use super::model::{EntryExport, entry_to_row, get_headers};
use crate::errors::AppResult;
use ::csv::Writer;
use std::path::Path;

/// Write entries as CSV to `path`.
pub(crate) fn write_csv(path: &Path, rows: &[EntryExport]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(get_headers())?;

    for row in rows {
        wtr.write_record(entry_to_row(row))?;
    }

    wtr.flush()?;
    Ok(())
}
