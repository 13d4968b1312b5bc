//! The 12x15 editable report grid.
//!
//! Column headers are a rendering concern only; the underlying row data
//! stays positional.

use crate::state::FormState;
use crate::theme::spacing;
use egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};
use report_model::{CELL_COUNT, ROW_COUNT};

/// Header labels for the 15 data columns: 2 supplier, 3 invoice,
/// 5 note categories x (items, qty).
const COLUMN_LABELS: [&str; CELL_COUNT] = [
    "Supplier Name",
    "Supplier Code",
    "Invoice No.",
    "Invoice Items",
    "Invoice Qty",
    "Note 1 Items",
    "Note 1 Qty",
    "Note 2 Items",
    "Note 2 Qty",
    "Note 3 Items",
    "Note 3 Qty",
    "Note 4 Items",
    "Note 4 Qty",
    "Note 5 Items",
    "Note 5 Qty",
];

/// Render the grid. Cell edits land directly in `form.cells`.
pub fn show(ui: &mut Ui, form: &mut FormState, striped: bool) {
    let text_height = egui::TextStyle::Body.resolve(ui.style()).size;

    ui.add_space(spacing::XS);

    egui::ScrollArea::horizontal().show(ui, |ui| {
        TableBuilder::new(ui)
            .striped(striped)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::exact(28.0)) // row number
            .columns(Column::initial(96.0).at_least(64.0).clip(true), CELL_COUNT)
            .header(text_height + 8.0, |mut header| {
                header.col(|ui| {
                    ui.label(RichText::new("No.").small().strong());
                });
                for label in COLUMN_LABELS {
                    header.col(|ui| {
                        ui.label(RichText::new(label).small().strong());
                    });
                }
            })
            .body(|body| {
                body.rows(text_height + 10.0, ROW_COUNT, |mut row| {
                    let row_idx = row.index();
                    row.col(|ui| {
                        ui.label(RichText::new((row_idx + 1).to_string()).weak());
                    });
                    for cell in &mut form.cells[row_idx] {
                        row.col(|ui| {
                            ui.add(
                                egui::TextEdit::singleline(cell)
                                    .frame(false)
                                    .desired_width(f32::INFINITY),
                            );
                        });
                    }
                });
            });
    });
}
