//! Editable form state.
//!
//! [`FormState`] owns everything the user edits: metadata fields, the
//! 12x15 grid, the page counter, the supplier list, and the supplier
//! dialog's input fields. All report semantics live here, with no egui
//! types involved, so the whole surface is unit-testable without a display.

use report_model::{ReportRecord, RowData, Supplier, blank_rows};

pub struct FormState {
    /// Report date, ISO `yyyy-mm-dd`. Auto-filled to today on startup/reset.
    pub date: String,
    pub store_location: String,
    pub quality_specialist: String,
    /// Page counter, 1-based.
    pub page: u32,
    /// Grid contents, always `ROW_COUNT` rows of `CELL_COUNT` cells.
    pub cells: Vec<RowData>,
    pub suppliers: Vec<Supplier>,

    // Supplier dialog inputs
    pub supplier_name_input: String,
    pub supplier_code_input: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    /// A fresh form: empty grid, page 1, date auto-filled to today.
    pub fn new() -> Self {
        Self {
            date: today_string(),
            store_location: String::new(),
            quality_specialist: String::new(),
            page: 1,
            cells: blank_rows(),
            suppliers: Vec::new(),
            supplier_name_input: String::new(),
            supplier_code_input: String::new(),
        }
    }

    /// Snapshot the form as a record.
    ///
    /// Grid cells are trimmed of surrounding whitespace; metadata fields are
    /// taken verbatim. Pure read, always succeeds.
    pub fn collect(&self) -> ReportRecord {
        ReportRecord {
            date: self.date.clone(),
            store_location: self.store_location.clone(),
            quality_specialist: self.quality_specialist.clone(),
            page: self.page,
            rows: self
                .cells
                .iter()
                .map(|row| row.iter().map(|cell| cell.trim().to_string()).collect())
                .collect(),
            suppliers: self.suppliers.clone(),
        }
    }

    /// Write a record back into the form.
    ///
    /// Grid population is positional and tolerant of short/ragged input:
    /// only rows/cells that exist in the grid are written, anything out of
    /// range is silently ignored, and cells the record does not cover keep
    /// their current contents. A page of 0 reads as 1.
    pub fn populate(&mut self, record: &ReportRecord) {
        self.date = record.date.clone();
        self.store_location = record.store_location.clone();
        self.quality_specialist = record.quality_specialist.clone();
        self.page = record.page.max(1);

        for (row, values) in self.cells.iter_mut().zip(&record.rows) {
            for (cell, value) in row.iter_mut().zip(values) {
                *cell = value.clone();
            }
        }

        self.suppliers = record.suppliers.clone();
    }

    /// Empty every grid cell. Metadata, page, and suppliers are untouched.
    pub fn clear_cells(&mut self) {
        for row in &mut self.cells {
            for cell in row {
                cell.clear();
            }
        }
    }

    /// Restore the initial state: date back to today, metadata and grid
    /// emptied, page back to 1. The supplier list is preserved.
    pub fn reset(&mut self) {
        self.date = today_string();
        self.store_location.clear();
        self.quality_specialist.clear();
        self.clear_cells();
        self.page = 1;
    }

    pub fn increment_page(&mut self) {
        self.page = self.page.saturating_add(1);
    }

    /// Append a supplier from the dialog inputs.
    ///
    /// No-op when either input is empty after trimming. On success both
    /// inputs are cleared. Duplicates are permitted.
    pub fn add_supplier(&mut self) -> bool {
        let Some(supplier) = Supplier::new(&self.supplier_name_input, &self.supplier_code_input)
        else {
            return false;
        };
        self.suppliers.push(supplier);
        self.supplier_name_input.clear();
        self.supplier_code_input.clear();
        true
    }

    /// Remove the supplier at `index`. Out-of-range indices are ignored;
    /// the index always comes from the current render in practice.
    pub fn remove_supplier(&mut self, index: usize) {
        if index < self.suppliers.len() {
            self.suppliers.remove(index);
        }
    }

    /// The summary text for the current form contents.
    pub fn summary_message(&self) -> String {
        report_model::summary_message(&self.collect())
    }
}

/// Today's local calendar date as ISO `yyyy-mm-dd`.
pub fn today_string() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}
