//! Wire-format tests for the report record schema.

use report_model::{CELL_COUNT, ROW_COUNT, ReportRecord, Supplier, document};

fn sample_record() -> ReportRecord {
    let mut record = ReportRecord::blank();
    record.date = "2026-01-05".to_string();
    record.store_location = "Store 12 / North".to_string();
    record.quality_specialist = "J. Moreno".to_string();
    record.page = 3;
    record.rows[0][0] = "Acme Foods".to_string();
    record.rows[0][1] = "A1".to_string();
    record.rows[0][2] = "INV-4410".to_string();
    record.rows[11][14] = "4".to_string();
    record.suppliers = vec![
        Supplier::new("Acme Foods", "A1").expect("supplier"),
        Supplier::new("Borealis", "B7").expect("supplier"),
    ];
    record
}

#[test]
fn wire_names_are_camel_case() {
    let json = document::to_slot_json(&sample_record()).expect("encode");

    assert!(json.contains("\"storeLocation\""));
    assert!(json.contains("\"qualitySpecialist\""));
    assert!(json.contains("\"suppliers\""));
    assert!(!json.contains("store_location"));
}

#[test]
fn parses_document_with_all_fields() {
    let text = r#"{
        "date": "2025-11-30",
        "storeLocation": "Store 4",
        "qualitySpecialist": "K. Ode",
        "page": 2,
        "rows": [["a", "b"], ["c"]],
        "suppliers": [{"name": "Acme", "code": "A1"}]
    }"#;

    let record = document::parse(text).expect("parse");
    assert_eq!(record.date, "2025-11-30");
    assert_eq!(record.store_location, "Store 4");
    assert_eq!(record.quality_specialist, "K. Ode");
    assert_eq!(record.page, 2);
    assert_eq!(record.rows.len(), 2);
    assert_eq!(record.suppliers[0].name, "Acme");
}

#[test]
fn missing_fields_take_defaults() {
    let record = document::parse("{}").expect("parse empty object");

    assert_eq!(record.date, "");
    assert_eq!(record.store_location, "");
    assert_eq!(record.quality_specialist, "");
    assert_eq!(record.page, 1);
    assert!(record.rows.is_empty());
    assert!(record.suppliers.is_empty());
}

#[test]
fn unknown_fields_are_ignored() {
    let record =
        document::parse(r#"{"date": "2026-02-02", "printedBy": "someone"}"#).expect("parse");
    assert_eq!(record.date, "2026-02-02");
}

#[test]
fn wrong_typed_field_is_an_error() {
    assert!(document::parse(r#"{"page": "three"}"#).is_err());
    assert!(document::parse(r#"{"rows": 7}"#).is_err());
}

#[test]
fn blank_grid_dimensions() {
    let record = ReportRecord::blank();
    assert_eq!(record.rows.len(), ROW_COUNT);
    assert!(record.rows.iter().all(|row| row.len() == CELL_COUNT));
}
