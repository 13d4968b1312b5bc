//! The rail: a read-only mirror of the report metadata, rendered from the
//! same state the inputs edit.

use crate::state::FormState;
use crate::theme::spacing;
use egui::{RichText, Ui};

pub fn show(ui: &mut Ui, form: &FormState) {
    let theme = crate::theme::colors(ui.visuals().dark_mode);

    ui.add_space(spacing::SM);
    ui.label(
        RichText::new("REPORT")
            .size(13.0)
            .strong()
            .color(theme.text_muted),
    );
    ui.add_space(spacing::SM);

    rail_row(ui, &theme, "Date", &form.date);
    rail_row(ui, &theme, "Store", &form.store_location);
    rail_row(ui, &theme, "Specialist", &form.quality_specialist);
    rail_row(ui, &theme, "Page", &form.page.to_string());
}

fn rail_row(
    ui: &mut Ui,
    theme: &crate::theme::ThemeColors,
    label: &str,
    value: &str,
) {
    ui.label(RichText::new(label).small().color(theme.text_muted));
    if value.is_empty() {
        ui.label(RichText::new("—").weak());
    } else {
        ui.label(RichText::new(value).color(theme.text_primary));
    }
    ui.add_space(spacing::XS);
}
