//! Backup write/restore tests.

use chrono::NaiveDate;
use report_model::{ReportRecord, Supplier};
use report_store::{backup_file_name, read_backup, write_backup};
use std::fs;
use tempfile::TempDir;

fn filled_record() -> ReportRecord {
    let mut record = ReportRecord::blank();
    record.date = "2026-03-02".to_string();
    record.store_location = "Store 2 / Harbor".to_string();
    record.quality_specialist = "L. Varga".to_string();
    record.page = 4;
    record.rows[0][0] = "Acme Foods".to_string();
    record.rows[0][2] = "INV-1208".to_string();
    record.rows[7][14] = "12".to_string();
    record.suppliers = vec![
        Supplier::new("Acme Foods", "A1").expect("supplier"),
        Supplier::new("Acme Foods", "A1").expect("duplicates are permitted"),
    ];
    record
}

#[test]
fn file_name_uses_export_date() {
    let date = NaiveDate::from_ymd_opt(2026, 3, 2).expect("valid date");
    assert_eq!(backup_file_name(date), "daily-report-2026-03-02.json");

    let padded = NaiveDate::from_ymd_opt(2026, 1, 9).expect("valid date");
    assert_eq!(backup_file_name(padded), "daily-report-2026-01-09.json");
}

#[test]
fn write_then_read_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("daily-report-2026-03-02.json");
    let record = filled_record();

    write_backup(&path, &record).unwrap();
    let restored = read_backup(&path).unwrap();

    assert_eq!(restored, record);
}

#[test]
fn backup_is_pretty_printed() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("backup.json");

    write_backup(&path, &filled_record()).unwrap();
    let text = fs::read_to_string(&path).unwrap();

    assert!(text.contains('\n'));
    assert!(text.contains("\"storeLocation\""));
}

#[test]
fn invalid_backup_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{not json").unwrap();

    assert!(read_backup(&path).is_err());
}

#[test]
fn missing_backup_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nothing-here.json");

    assert!(read_backup(&path).is_err());
}
