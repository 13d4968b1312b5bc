//! Report title and metadata inputs.

use crate::state::FormState;
use crate::theme::spacing;
use egui::{RichText, Ui};

pub fn show(ui: &mut Ui, form: &mut FormState) {
    let theme = crate::theme::colors(ui.visuals().dark_mode);

    ui.horizontal(|ui| {
        ui.heading("Daily Report");
        ui.label(
            RichText::new(format!("Page {}", form.page))
                .strong()
                .color(theme.accent),
        );
    });

    ui.add_space(spacing::SM);

    egui::Grid::new("report_meta")
        .num_columns(6)
        .spacing([spacing::MD, spacing::XS])
        .show(ui, |ui| {
            ui.label("Date");
            ui.add(
                egui::TextEdit::singleline(&mut form.date)
                    .desired_width(110.0)
                    .hint_text("yyyy-mm-dd"),
            );
            ui.label("Store / Location");
            ui.add(egui::TextEdit::singleline(&mut form.store_location).desired_width(200.0));
            ui.label("Quality Specialist");
            ui.add(egui::TextEdit::singleline(&mut form.quality_specialist).desired_width(200.0));
            ui.end_row();
        });
}
