pub mod document;
pub mod error;
pub mod record;
pub mod summary;

pub use error::{ReportError, Result};
pub use record::{
    CELL_COUNT, INVOICE_COLUMNS, NOTE_CATEGORIES, ROW_COUNT, ReportRecord, RowData,
    SUPPLIER_COLUMNS, Supplier, blank_rows,
};
pub use summary::{rows_with_entries, summary_message};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supplier_requires_both_fields() {
        assert!(Supplier::new("", "A1").is_none());
        assert!(Supplier::new("Acme", "").is_none());
        assert!(Supplier::new("  ", "  ").is_none());

        let supplier = Supplier::new("  Acme  ", " A1 ").expect("valid supplier");
        assert_eq!(supplier.name, "Acme");
        assert_eq!(supplier.code, "A1");
    }

    #[test]
    fn blank_record_has_full_grid() {
        let record = ReportRecord::blank();
        assert_eq!(record.rows.len(), ROW_COUNT);
        assert!(record.rows.iter().all(|row| row.len() == CELL_COUNT));
        assert_eq!(record.page, 1);
    }

    #[test]
    fn summary_counts_only_rows_with_content() {
        let mut record = ReportRecord::blank();
        record.rows[2][6] = "2 crates".to_string();

        assert_eq!(rows_with_entries(&record), 1);

        record.date = "2026-03-14".to_string();
        record.page = 2;
        assert_eq!(
            summary_message(&record),
            "Date: 2026-03-14\nRows with entries: 1\nPage: 2"
        );
    }
}
