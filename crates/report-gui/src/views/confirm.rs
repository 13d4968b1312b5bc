//! Yes/no confirmation dialog for destructive actions.

use crate::state::{ConfirmAction, UiState};
use crate::theme::spacing;
use egui::RichText;

/// Show the pending confirmation, if any. Returns the confirmed action;
/// both "No" and closing the window dismiss it.
pub fn show(ctx: &egui::Context, ui_state: &mut UiState) -> Option<ConfirmAction> {
    let action = ui_state.confirm?;

    let theme = crate::theme::colors(ctx.style().visuals.dark_mode);
    let mut confirmed = None;
    let mut open = true;
    let mut decided = false;

    egui::Window::new(action.title())
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(egui_phosphor::regular::WARNING)
                        .size(18.0)
                        .color(theme.warning),
                );
                ui.label(action.message());
            });

            ui.add_space(spacing::MD);
            ui.horizontal(|ui| {
                if ui.button(RichText::new("Yes").strong()).clicked() {
                    confirmed = Some(action);
                    decided = true;
                }
                if ui.button("No").clicked() {
                    decided = true;
                }
            });
        });

    if decided || !open {
        ui_state.confirm = None;
    }

    confirmed
}
