//! Settings window UI implementation.
//!
//! A native-feeling settings window with a category sidebar:
//! - General (dark mode, startup load)
//! - Display (rail panel, grid striping)

use super::{DisplaySettings, GeneralSettings, Settings};
use crate::theme::{ThemeColors, colors};
use eframe::egui::{self, Color32, CornerRadius, Stroke, Vec2};

/// Settings category tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsCategory {
    #[default]
    General,
    Display,
}

impl SettingsCategory {
    /// Get all categories.
    pub const fn all() -> &'static [SettingsCategory] {
        &[Self::General, Self::Display]
    }

    /// Get the display name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Display => "Display",
        }
    }

    /// Get the icon.
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::General => egui_phosphor::regular::GEAR,
            Self::Display => egui_phosphor::regular::EYE,
        }
    }
}

/// Result of showing the settings window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsResult {
    /// Keep the window open.
    Open,
    /// Apply changes and close.
    Apply,
    /// Cancel changes and close.
    Cancel,
}

/// Settings window state.
#[derive(Default)]
pub struct SettingsWindow {
    /// Currently selected category.
    category: SettingsCategory,
}

impl SettingsWindow {
    /// Create a new settings window.
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the settings as a separate native window using viewports.
    pub fn show(
        &mut self,
        ctx: &egui::Context,
        settings: &mut Settings,
        dark_mode: bool,
    ) -> SettingsResult {
        let theme = colors(dark_mode);
        let mut result = SettingsResult::Open;

        let viewport_id = egui::ViewportId::from_hash_of("settings_window");

        ctx.show_viewport_immediate(
            viewport_id,
            egui::ViewportBuilder::default()
                .with_title("Settings")
                .with_inner_size([560.0, 380.0])
                .with_min_inner_size([480.0, 320.0])
                .with_resizable(true),
            |ctx, _class| {
                self.apply_native_style(ctx, &theme);

                egui::CentralPanel::default()
                    .frame(egui::Frame::central_panel(&ctx.style()).inner_margin(egui::Margin::ZERO))
                    .show(ctx, |ui| {
                        result = self.show_native_layout(ui, settings, &theme);
                    });

                if ctx.input(|i| i.viewport().close_requested()) {
                    result = SettingsResult::Cancel;
                }
            },
        );

        result
    }

    /// Apply native-looking style to the context.
    fn apply_native_style(&self, ctx: &egui::Context, theme: &ThemeColors) {
        let mut style = (*ctx.style()).clone();

        style.visuals.widgets.noninteractive.bg_fill = theme.bg_secondary;
        style.visuals.widgets.inactive.bg_fill = theme.bg_secondary;
        style.visuals.widgets.hovered.bg_fill = theme.accent.linear_multiply(0.1);
        style.visuals.widgets.active.bg_fill = theme.accent.linear_multiply(0.2);

        style.visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, theme.border);
        style.visuals.widgets.hovered.bg_stroke =
            Stroke::new(1.0, theme.accent.linear_multiply(0.5));

        style.visuals.window_corner_radius = CornerRadius::same(8);
        style.visuals.menu_corner_radius = CornerRadius::same(6);

        ctx.set_style(style);
    }

    /// Show the sidebar + content layout.
    fn show_native_layout(
        &mut self,
        ui: &mut egui::Ui,
        settings: &mut Settings,
        theme: &ThemeColors,
    ) -> SettingsResult {
        let mut result = SettingsResult::Open;

        ui.horizontal(|ui| {
            self.show_sidebar(ui, theme);

            ui.add(egui::Separator::default().vertical());

            ui.vertical(|ui| {
                ui.set_min_width(ui.available_width());

                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.add_space(20.0);
                        ui.horizontal(|ui| {
                            ui.add_space(24.0);
                            ui.vertical(|ui| {
                                ui.set_max_width(420.0);
                                match self.category {
                                    SettingsCategory::General => {
                                        self.show_general(ui, &mut settings.general, theme);
                                    }
                                    SettingsCategory::Display => {
                                        self.show_display(ui, &mut settings.display, theme);
                                    }
                                }
                            });
                        });
                    });

                ui.with_layout(egui::Layout::bottom_up(egui::Align::RIGHT), |ui| {
                    ui.add_space(12.0);
                    ui.horizontal(|ui| {
                        ui.add_space(16.0);

                        if ui.button("Reset to Defaults").clicked() {
                            *settings = Settings::default();
                        }

                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.add_space(16.0);

                            if ui
                                .add(
                                    egui::Button::new("Apply")
                                        .fill(theme.accent)
                                        .min_size(Vec2::new(80.0, 28.0)),
                                )
                                .clicked()
                            {
                                result = SettingsResult::Apply;
                            }

                            ui.add_space(8.0);

                            if ui
                                .add(egui::Button::new("Cancel").min_size(Vec2::new(80.0, 28.0)))
                                .clicked()
                            {
                                result = SettingsResult::Cancel;
                            }
                        });
                    });
                    ui.add_space(8.0);
                    ui.separator();
                });
            });
        });

        result
    }

    /// Show the sidebar with category navigation.
    fn show_sidebar(&mut self, ui: &mut egui::Ui, theme: &ThemeColors) {
        ui.vertical(|ui| {
            ui.set_min_width(140.0);
            ui.set_max_width(140.0);

            let rect = ui.available_rect_before_wrap();
            ui.painter()
                .rect_filled(rect, CornerRadius::ZERO, theme.bg_secondary);

            ui.add_space(16.0);

            for category in SettingsCategory::all() {
                let selected = self.category == *category;

                let response = ui.allocate_response(
                    Vec2::new(ui.available_width() - 16.0, 32.0),
                    egui::Sense::click(),
                );

                let bg_rect = response.rect.expand2(Vec2::new(8.0, 0.0));
                if selected {
                    ui.painter().rect_filled(
                        bg_rect,
                        CornerRadius::same(6),
                        theme.accent.linear_multiply(0.15),
                    );
                } else if response.hovered() {
                    ui.painter().rect_filled(
                        bg_rect,
                        CornerRadius::same(6),
                        Color32::from_white_alpha(10),
                    );
                }

                let text_color = if selected {
                    theme.accent
                } else {
                    theme.text_primary
                };

                ui.painter().text(
                    response.rect.left_center() + Vec2::new(12.0, 0.0),
                    egui::Align2::LEFT_CENTER,
                    format!("{} {}", category.icon(), category.name()),
                    egui::FontId::proportional(14.0),
                    text_color,
                );

                if response.clicked() {
                    self.category = *category;
                }
            }
        });
    }

    /// Show a section header.
    fn section_header(&self, ui: &mut egui::Ui, title: &str, theme: &ThemeColors) {
        ui.label(
            egui::RichText::new(title)
                .size(20.0)
                .strong()
                .color(theme.text_primary),
        );
        ui.add_space(16.0);
    }

    /// Show a setting row with label and widget.
    fn setting_row<R>(
        &self,
        ui: &mut egui::Ui,
        label: &str,
        description: Option<&str>,
        theme: &ThemeColors,
        add_widget: impl FnOnce(&mut egui::Ui) -> R,
    ) {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.set_min_width(200.0);
                ui.label(egui::RichText::new(label).color(theme.text_primary));
                if let Some(desc) = description {
                    ui.label(egui::RichText::new(desc).small().color(theme.text_muted));
                }
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                add_widget(ui);
            });
        });
        ui.add_space(12.0);
    }

    /// Show a group box for related settings.
    fn setting_group(
        &self,
        ui: &mut egui::Ui,
        title: Option<&str>,
        theme: &ThemeColors,
        add_content: impl FnOnce(&mut egui::Ui),
    ) {
        if let Some(t) = title {
            ui.label(
                egui::RichText::new(t)
                    .size(13.0)
                    .strong()
                    .color(theme.text_muted),
            );
            ui.add_space(8.0);
        }

        egui::Frame::new()
            .fill(theme.bg_secondary)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16)
            .show(ui, |ui| {
                add_content(ui);
            });

        ui.add_space(20.0);
    }

    /// Show general settings.
    fn show_general(&self, ui: &mut egui::Ui, general: &mut GeneralSettings, theme: &ThemeColors) {
        self.section_header(ui, "General", theme);

        self.setting_group(ui, Some("APPEARANCE"), theme, |ui| {
            self.setting_row(ui, "Dark Mode", Some("Use dark color scheme"), theme, |ui| {
                ui.add(toggle(&mut general.dark_mode));
            });
        });

        self.setting_group(ui, Some("STARTUP"), theme, |ui| {
            self.setting_row(
                ui,
                "Load Saved Report",
                Some("Populate the form from the saved report at launch"),
                theme,
                |ui| {
                    ui.add(toggle(&mut general.load_on_startup));
                },
            );
        });
    }

    /// Show display settings.
    fn show_display(&self, ui: &mut egui::Ui, display: &mut DisplaySettings, theme: &ThemeColors) {
        self.section_header(ui, "Display", theme);

        self.setting_group(ui, Some("LAYOUT"), theme, |ui| {
            self.setting_row(
                ui,
                "Rail Panel",
                Some("Read-only metadata panel beside the grid"),
                theme,
                |ui| {
                    ui.add(toggle(&mut display.show_rail));
                },
            );

            ui.separator();
            ui.add_space(8.0);

            self.setting_row(
                ui,
                "Striped Rows",
                Some("Stripe alternating rows in the grid"),
                theme,
                |ui| {
                    ui.add(toggle(&mut display.striped_rows));
                },
            );
        });
    }
}

/// A toggle switch widget (iOS-style).
fn toggle(value: &mut bool) -> impl egui::Widget + '_ {
    move |ui: &mut egui::Ui| -> egui::Response {
        let desired_size = Vec2::new(44.0, 24.0);
        let (rect, response) = ui.allocate_exact_size(desired_size, egui::Sense::click());

        if response.clicked() {
            *value = !*value;
        }

        if ui.is_rect_visible(rect) {
            let how_on = ui.ctx().animate_bool_responsive(response.id, *value);

            let bg_color = if *value {
                Color32::from_rgb(52, 199, 89) // iOS green
            } else {
                Color32::from_gray(180)
            };

            ui.painter()
                .rect_filled(rect, CornerRadius::same(12), bg_color);

            let knob_radius = 10.0;
            let knob_x = egui::lerp(
                (rect.left() + knob_radius + 2.0)..=(rect.right() - knob_radius - 2.0),
                how_on,
            );
            let knob_center = egui::pos2(knob_x, rect.center().y);

            ui.painter()
                .circle_filled(knob_center, knob_radius, Color32::WHITE);
        }

        response
    }
}
