//! The persistent report slot.
//!
//! One fixed path holds the latest saved report as a compact JSON document,
//! replaced wholesale on every save:
//! - macOS: ~/Library/Application Support/com.daily-report-studio.Daily Report Studio/
//! - Windows: %APPDATA%/daily-report-studio/data/
//! - Linux: ~/.local/share/daily-report-studio/

use crate::error::{Result, StoreError};
use directories::ProjectDirs;
use report_model::{ReportRecord, document};
use std::fs;
use std::path::{Path, PathBuf};

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "daily-report-studio";
const APP_NAME: &str = "Daily Report Studio";
const SLOT_FILENAME: &str = "daily-report.json";

/// Get the path of the slot file.
///
/// Returns `None` if the platform-specific directory cannot be determined.
pub fn slot_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.data_dir().join(SLOT_FILENAME))
}

/// Write a record into a slot file, replacing any previous contents.
///
/// Uses atomic write (temp file + rename) so a crash mid-save cannot leave
/// a half-written slot behind.
pub fn save_to(path: &Path, record: &ReportRecord) -> Result<()> {
    let json = document::to_slot_json(record)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, json)?;
    fs::rename(&temp_path, path)?;

    tracing::info!("Saved report to {}", path.display());
    Ok(())
}

/// Read a record from a slot file.
///
/// A missing file is not an error; it reads as `None` (nothing saved yet).
pub fn load_from(path: &Path) -> Result<Option<ReportRecord>> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    Ok(Some(document::parse(&text)?))
}

/// Save a record to the default slot.
pub fn save(record: &ReportRecord) -> Result<PathBuf> {
    let path = slot_path().ok_or(StoreError::NoDataDir)?;
    save_to(&path, record)?;
    Ok(path)
}

/// Load the record from the default slot, if one has been saved.
pub fn load() -> Result<Option<ReportRecord>> {
    let path = slot_path().ok_or(StoreError::NoDataDir)?;
    load_from(&path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_record() -> ReportRecord {
        let mut record = ReportRecord::blank();
        record.date = "2026-02-17".to_string();
        record.store_location = "Store 9".to_string();
        record.page = 2;
        record.rows[3][5] = "6 boxes".to_string();
        record
    }

    #[test]
    fn slot_path_exists() {
        assert!(slot_path().is_some());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("daily-report.json");
        let record = sample_record();

        save_to(&path, &record).unwrap();
        let loaded = load_from(&path).unwrap().expect("slot exists");

        assert_eq!(loaded, record);
    }

    #[test]
    fn save_overwrites_previous_contents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("daily-report.json");

        save_to(&path, &sample_record()).unwrap();
        let mut second = sample_record();
        second.page = 9;
        save_to(&path, &second).unwrap();

        let loaded = load_from(&path).unwrap().expect("slot exists");
        assert_eq!(loaded.page, 9);
    }

    #[test]
    fn missing_slot_loads_as_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("daily-report.json");

        assert!(load_from(&path).unwrap().is_none());
    }

    #[test]
    fn corrupt_slot_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("daily-report.json");
        fs::write(&path, "{not json").unwrap();

        assert!(load_from(&path).is_err());
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("daily-report.json");

        save_to(&path, &sample_record()).unwrap();
        assert!(path.exists());
    }
}
