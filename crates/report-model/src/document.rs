//! JSON document codec for report records.
//!
//! Two encodings of the same schema: the slot form is compact (written on
//! every save), the backup form is pretty-printed (meant to be read and
//! carried around as a file). Parsing accepts either.

use crate::error::Result;
use crate::record::ReportRecord;

/// Encode a record for the persistent slot (compact).
pub fn to_slot_json(record: &ReportRecord) -> Result<String> {
    Ok(serde_json::to_string(record)?)
}

/// Encode a record for a standalone backup file (pretty-printed).
pub fn to_backup_json(record: &ReportRecord) -> Result<String> {
    Ok(serde_json::to_string_pretty(record)?)
}

/// Parse a report document.
///
/// Missing fields take their defaults; a wrong-typed field is an error.
/// Callers surface the error and leave their current state untouched.
pub fn parse(text: &str) -> Result<ReportRecord> {
    Ok(serde_json::from_str(text)?)
}
