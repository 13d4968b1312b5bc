//! Backup files: export/import of the full form state as a standalone
//! document, distinct from the slot save/load path.

use crate::error::Result;
use chrono::NaiveDate;
use report_model::{ReportRecord, document};
use std::fs;
use std::path::Path;

/// Suggested file name for a backup taken on `date` (the date of export,
/// not the report date).
pub fn backup_file_name(date: NaiveDate) -> String {
    format!("daily-report-{}.json", date.format("%Y-%m-%d"))
}

/// Write a pretty-printed backup document to `path`.
pub fn write_backup(path: &Path, record: &ReportRecord) -> Result<()> {
    let json = document::to_backup_json(record)?;
    fs::write(path, json)?;
    tracing::info!("Wrote backup to {}", path.display());
    Ok(())
}

/// Read a backup document from `path`.
///
/// Any read or parse failure is surfaced to the caller; the form is only
/// populated on success.
pub fn read_backup(path: &Path) -> Result<ReportRecord> {
    let text = fs::read_to_string(path)?;
    Ok(document::parse(&text)?)
}
