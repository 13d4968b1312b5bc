//! Toolbar with the report actions.

use crate::state::FormState;
use crate::theme::spacing;
use egui::{RichText, Ui};

/// What the user asked the toolbar to do. Dispatched by the app after the
/// frame's borrows end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    Save,
    Backup,
    Restore,
    Generate,
    ManageSuppliers,
    PagePlus,
    Clear,
    Reset,
}

/// Render the toolbar. Returns the clicked action, if any.
pub fn show(ui: &mut Ui, form: &FormState) -> Option<ToolbarAction> {
    let mut action = None;

    ui.add_space(spacing::XS);
    ui.horizontal_wrapped(|ui| {
        if ui
            .button(format!("{} Save", egui_phosphor::regular::FLOPPY_DISK))
            .on_hover_text("Save to the report slot")
            .clicked()
        {
            action = Some(ToolbarAction::Save);
        }
        if ui
            .button(format!(
                "{} Back Up…",
                egui_phosphor::regular::DOWNLOAD_SIMPLE
            ))
            .on_hover_text("Export the form as a JSON file")
            .clicked()
        {
            action = Some(ToolbarAction::Backup);
        }
        if ui
            .button(format!("{} Restore…", egui_phosphor::regular::UPLOAD_SIMPLE))
            .on_hover_text("Import a previously exported JSON file")
            .clicked()
        {
            action = Some(ToolbarAction::Restore);
        }

        ui.separator();

        if ui
            .button(format!("{} Summary", egui_phosphor::regular::LIST_CHECKS))
            .clicked()
        {
            action = Some(ToolbarAction::Generate);
        }
        if ui
            .button(format!("{} Suppliers", egui_phosphor::regular::TRUCK))
            .clicked()
        {
            action = Some(ToolbarAction::ManageSuppliers);
        }

        ui.separator();

        if ui
            .button(format!("{} Page", egui_phosphor::regular::PLUS))
            .on_hover_text("Start a new page")
            .clicked()
        {
            action = Some(ToolbarAction::PagePlus);
        }
        ui.label(RichText::new(format!("Page {}", form.page)).strong());

        ui.separator();

        if ui
            .button(format!("{} Clear", egui_phosphor::regular::ERASER))
            .clicked()
        {
            action = Some(ToolbarAction::Clear);
        }
        if ui
            .button(format!(
                "{} Reset",
                egui_phosphor::regular::ARROW_COUNTER_CLOCKWISE
            ))
            .clicked()
        {
            action = Some(ToolbarAction::Reset);
        }
    });
    ui.add_space(spacing::XS);

    action
}
