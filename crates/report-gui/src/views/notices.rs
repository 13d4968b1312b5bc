//! Ephemeral notice toasts, stacked in the top-right corner.

use crate::state::{NoticeKind, UiState};
use crate::theme::spacing;
use egui::{CornerRadius, Margin, RichText, Stroke};

/// Render current notices. A clicked notice is dismissed immediately.
pub fn show(ctx: &egui::Context, ui_state: &mut UiState) {
    if ui_state.notices.is_empty() {
        return;
    }

    let theme = crate::theme::colors(ctx.style().visuals.dark_mode);
    let mut dismiss = None;

    egui::Area::new(egui::Id::new("notices"))
        .anchor(egui::Align2::RIGHT_TOP, [-spacing::MD, spacing::MD])
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            ui.set_max_width(340.0);

            for (idx, notice) in ui_state.notices.iter().enumerate() {
                let (icon, color) = match notice.kind {
                    NoticeKind::Info => (egui_phosphor::regular::CHECK_CIRCLE, theme.success),
                    NoticeKind::Error => (egui_phosphor::regular::WARNING, theme.error),
                };

                let response = egui::Frame::new()
                    .fill(theme.bg_secondary)
                    .stroke(Stroke::new(1.0, theme.border))
                    .corner_radius(CornerRadius::same(6))
                    .inner_margin(Margin::same(10))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(icon).size(16.0).color(color));
                            ui.label(RichText::new(&notice.text).color(theme.text_primary));
                        });
                    })
                    .response;

                if response.interact(egui::Sense::click()).clicked() {
                    dismiss = Some(idx);
                }

                ui.add_space(spacing::XS);
            }
        });

    if let Some(idx) = dismiss {
        ui_state.notices.remove(idx);
    }
}
