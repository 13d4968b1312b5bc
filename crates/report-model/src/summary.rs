//! Report summary computation.

use crate::record::ReportRecord;

/// Count the rows that have at least one non-empty cell.
pub fn rows_with_entries(record: &ReportRecord) -> usize {
    record
        .rows
        .iter()
        .filter(|row| row.iter().any(|cell| !cell.is_empty()))
        .count()
}

/// The summary text shown to the user: date, filled-row count, page.
pub fn summary_message(record: &ReportRecord) -> String {
    format!(
        "Date: {}\nRows with entries: {}\nPage: {}",
        record.date,
        rows_with_entries(record),
        record.page
    )
}
