//! Report record types.
//!
//! A [`ReportRecord`] is the full persisted form state: metadata, the grid
//! contents, the page counter, and the supplier list. Records have no
//! identity of their own; one is rebuilt from the form on every save or
//! export, and the form is rebuilt from one on every restore.

use serde::{Deserialize, Serialize};

/// Number of grid rows. Fixed at initialization, never resized.
pub const ROW_COUNT: usize = 12;

/// Number of cells per row: 2 supplier + 3 invoice + 10 notes columns.
pub const CELL_COUNT: usize = SUPPLIER_COLUMNS + INVOICE_COLUMNS + NOTE_CATEGORIES * 2;

/// Supplier columns (name, code).
pub const SUPPLIER_COLUMNS: usize = 2;

/// Invoice columns (number, items, qty).
pub const INVOICE_COLUMNS: usize = 3;

/// Note categories; each contributes an items column and a qty column.
pub const NOTE_CATEGORIES: usize = 5;

/// One grid row: an ordered sequence of free-text cell values. Positional,
/// no column names retained.
pub type RowData = Vec<String>;

/// An entry in the supplier list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub name: String,
    pub code: String,
}

impl Supplier {
    /// Build a supplier from raw input, trimming both fields.
    ///
    /// Returns `None` if either field is empty after trimming; both are
    /// required at creation. Duplicates are permitted in the list itself.
    pub fn new(name: &str, code: &str) -> Option<Self> {
        let name = name.trim();
        let code = code.trim();
        if name.is_empty() || code.is_empty() {
            return None;
        }
        Some(Self {
            name: name.to_string(),
            code: code.to_string(),
        })
    }
}

/// The complete form state as persisted to the slot and to backup files.
///
/// Wire names are camelCase. Every field is tolerant of being absent in a
/// stored document: missing strings read as empty, a missing page reads
/// as 1, and missing rows/suppliers read as empty sequences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportRecord {
    /// Report date, ISO `yyyy-mm-dd`.
    pub date: String,
    pub store_location: String,
    pub quality_specialist: String,
    /// Page counter, 1-based.
    pub page: u32,
    pub rows: Vec<RowData>,
    pub suppliers: Vec<Supplier>,
}

impl Default for ReportRecord {
    fn default() -> Self {
        Self {
            date: String::new(),
            store_location: String::new(),
            quality_specialist: String::new(),
            page: 1,
            rows: Vec::new(),
            suppliers: Vec::new(),
        }
    }
}

impl ReportRecord {
    /// A record with a full grid of empty cells, as a fresh form produces.
    pub fn blank() -> Self {
        Self {
            rows: blank_rows(),
            ..Self::default()
        }
    }
}

/// A full grid of empty cells (`ROW_COUNT` rows of `CELL_COUNT` cells).
pub fn blank_rows() -> Vec<RowData> {
    vec![vec![String::new(); CELL_COUNT]; ROW_COUNT]
}
