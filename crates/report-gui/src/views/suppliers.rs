//! Supplier list dialog.
//!
//! Suppliers travel with the record on save/export/import. "Save Suppliers"
//! performs a slot save and closes the dialog; handled by the app since the
//! dialog itself never touches storage.

use crate::state::{FormState, UiState};
use crate::theme::spacing;
use egui::{RichText, Ui};

/// Dialog request that has to be handled outside the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuppliersAction {
    SaveAndClose,
}

/// Show the dialog when open. Returns the action the app must run.
pub fn show(
    ctx: &egui::Context,
    form: &mut FormState,
    ui_state: &mut UiState,
) -> Option<SuppliersAction> {
    if !ui_state.suppliers_open {
        return None;
    }

    let mut action = None;
    let mut open = true;
    let mut close_clicked = false;

    egui::Window::new("Manage Suppliers")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_min_width(380.0);
            show_list(ui, form);

            ui.separator();
            show_add_row(ui, form);

            ui.add_space(spacing::SM);
            ui.horizontal(|ui| {
                if ui.button("Save Suppliers").clicked() {
                    action = Some(SuppliersAction::SaveAndClose);
                    close_clicked = true;
                }
                if ui.button("Close").clicked() {
                    close_clicked = true;
                }
            });
        });

    ui_state.suppliers_open = open && !close_clicked;
    action
}

fn show_list(ui: &mut Ui, form: &mut FormState) {
    // Collect the removal first; the list is borrowed during the loop.
    let mut remove_index = None;

    egui::ScrollArea::vertical()
        .max_height(220.0)
        .show(ui, |ui| {
            for (idx, supplier) in form.suppliers.iter().enumerate() {
                ui.horizontal(|ui| {
                    ui.label(format!("{} ({})", supplier.name, supplier.code));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("Remove").clicked() {
                            remove_index = Some(idx);
                        }
                    });
                });
            }

            if form.suppliers.is_empty() {
                ui.label(RichText::new("No suppliers yet.").weak());
            }
        });

    if let Some(idx) = remove_index {
        form.remove_supplier(idx);
    }
}

fn show_add_row(ui: &mut Ui, form: &mut FormState) {
    ui.horizontal(|ui| {
        ui.add(
            egui::TextEdit::singleline(&mut form.supplier_name_input)
                .hint_text("Name")
                .desired_width(140.0),
        );
        let code_response = ui.add(
            egui::TextEdit::singleline(&mut form.supplier_code_input)
                .hint_text("Code")
                .desired_width(90.0),
        );

        // Enter in the code field also adds
        let submitted =
            code_response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        if ui
            .button(format!("{} Add", egui_phosphor::regular::PLUS))
            .clicked()
            || submitted
        {
            form.add_supplier();
        }
    });
}
