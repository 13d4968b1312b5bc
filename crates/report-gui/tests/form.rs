//! Tests for the form state: collect/populate, supplier list, clear/reset.

use report_gui::state::{FormState, today_string};
use report_model::{CELL_COUNT, ROW_COUNT, ReportRecord, Supplier, document};

fn filled_form() -> FormState {
    let mut form = FormState::new();
    form.date = "2026-05-20".to_string();
    form.store_location = "Store 3 / East".to_string();
    form.quality_specialist = "R. Adeyemi".to_string();
    form.page = 2;
    form.cells[0][0] = "Acme Foods".to_string();
    form.cells[2][6] = "  3 crates  ".to_string();
    form.cells[11][14] = "9".to_string();
    form.suppliers = vec![Supplier::new("Acme Foods", "A1").expect("supplier")];
    form
}

#[test]
fn collect_trims_cells_and_keeps_metadata_verbatim() {
    let mut form = filled_form();
    form.store_location = "  padded  ".to_string();

    let record = form.collect();

    assert_eq!(record.rows[2][6], "3 crates");
    assert_eq!(record.store_location, "  padded  ");
    assert_eq!(record.page, 2);
    assert_eq!(record.suppliers.len(), 1);
}

#[test]
fn collect_is_idempotent() {
    let form = filled_form();
    assert_eq!(form.collect(), form.collect());
}

#[test]
fn populate_then_collect_round_trips() {
    let record = filled_form().collect();
    let json = document::to_backup_json(&record).expect("encode");
    let parsed = document::parse(&json).expect("parse");

    let mut form = FormState::new();
    form.populate(&parsed);

    assert_eq!(form.collect(), record);
}

#[test]
fn populate_ignores_out_of_range_rows_and_cells() {
    let mut form = filled_form();

    // 20 rows of 30 cells; only the 12x15 window lands.
    let record = ReportRecord {
        rows: vec![vec!["x".to_string(); 30]; 20],
        ..ReportRecord::default()
    };
    form.populate(&record);

    assert_eq!(form.cells.len(), ROW_COUNT);
    assert!(form.cells.iter().all(|row| row.len() == CELL_COUNT));
    assert!(form.cells.iter().flatten().all(|cell| cell == "x"));
}

#[test]
fn populate_leaves_uncovered_cells_unmodified() {
    let mut form = filled_form();

    // 3 rows of 4 cells; everything outside that window keeps its content.
    let record = ReportRecord {
        rows: vec![vec!["y".to_string(); 4]; 3],
        ..ReportRecord::default()
    };
    form.populate(&record);

    assert_eq!(form.cells[0][0], "y");
    assert_eq!(form.cells[2][3], "y");
    assert_eq!(form.cells[2][6], "  3 crates  ");
    assert_eq!(form.cells[11][14], "9");
}

#[test]
fn populate_normalizes_page_zero_to_one() {
    let mut form = FormState::new();
    let record = ReportRecord {
        page: 0,
        ..ReportRecord::default()
    };
    form.populate(&record);

    assert_eq!(form.page, 1);
}

#[test]
fn add_supplier_rejects_empty_inputs() {
    let mut form = FormState::new();

    form.supplier_name_input = String::new();
    form.supplier_code_input = "X".to_string();
    assert!(!form.add_supplier());

    form.supplier_name_input = "Y".to_string();
    form.supplier_code_input = String::new();
    assert!(!form.add_supplier());

    form.supplier_name_input = "   ".to_string();
    form.supplier_code_input = "   ".to_string();
    assert!(!form.add_supplier());

    assert!(form.suppliers.is_empty());
}

#[test]
fn add_supplier_appends_and_clears_inputs() {
    let mut form = FormState::new();
    form.supplier_name_input = "Acme".to_string();
    form.supplier_code_input = "A1".to_string();

    assert!(form.add_supplier());

    assert_eq!(form.suppliers.len(), 1);
    assert_eq!(form.suppliers[0].name, "Acme");
    assert_eq!(form.suppliers[0].code, "A1");
    assert!(form.supplier_name_input.is_empty());
    assert!(form.supplier_code_input.is_empty());
}

#[test]
fn remove_supplier_keeps_order() {
    let mut form = FormState::new();
    form.suppliers = vec![
        Supplier::new("A", "1").expect("supplier"),
        Supplier::new("B", "2").expect("supplier"),
        Supplier::new("C", "3").expect("supplier"),
    ];

    form.remove_supplier(1);

    assert_eq!(form.suppliers.len(), 2);
    assert_eq!(form.suppliers[0].name, "A");
    assert_eq!(form.suppliers[1].name, "C");

    // Out of range is ignored.
    form.remove_supplier(10);
    assert_eq!(form.suppliers.len(), 2);
}

#[test]
fn clear_cells_leaves_everything_else() {
    let mut form = filled_form();
    form.clear_cells();

    assert!(form.cells.iter().flatten().all(String::is_empty));
    assert_eq!(form.date, "2026-05-20");
    assert_eq!(form.page, 2);
    assert_eq!(form.suppliers.len(), 1);
}

#[test]
fn reset_restores_initial_state_but_preserves_suppliers() {
    let mut form = filled_form();
    form.reset();

    assert!(form.cells.iter().flatten().all(String::is_empty));
    assert_eq!(form.date, today_string());
    assert!(form.store_location.is_empty());
    assert!(form.quality_specialist.is_empty());
    assert_eq!(form.page, 1);
    assert_eq!(form.suppliers.len(), 1);
}

#[test]
fn page_increments_from_toolbar_action() {
    let mut form = FormState::new();
    form.increment_page();
    form.increment_page();
    assert_eq!(form.page, 3);
}

#[test]
fn summary_counts_rows_with_entries() {
    let mut form = FormState::new();
    form.date = "2026-06-01".to_string();
    form.cells[2][6] = "anything".to_string();

    assert_eq!(
        form.summary_message(),
        "Date: 2026-06-01\nRows with entries: 1\nPage: 1"
    );
}
