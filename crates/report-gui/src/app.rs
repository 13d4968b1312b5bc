//! Main application struct and eframe::App implementation

use crate::menu;
use crate::settings::ui::{SettingsResult, SettingsWindow};
use crate::settings::{load_settings, save_settings};
use crate::state::{AppState, ConfirmAction};
use crate::theme::spacing;
use crate::views::{self, SuppliersAction, ToolbarAction};
use crossbeam_channel::Receiver;
use eframe::egui;
use muda::{Menu, MenuEvent};
use report_store::{backup_file_name, read_backup, slot, write_backup};

/// Main application struct
pub struct ReportApp {
    state: AppState,
    settings_window: SettingsWindow,
    menu_receiver: Receiver<MenuEvent>,
    /// Keep the menu alive for the lifetime of the app
    #[allow(dead_code)]
    menu: Menu,
}

impl ReportApp {
    /// Create a new application instance
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        menu_receiver: Receiver<MenuEvent>,
        menu: Menu,
    ) -> Self {
        // Initialize Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        // Load settings from disk
        let settings = load_settings();
        tracing::info!("Loaded settings: dark_mode={}", settings.general.dark_mode);
        apply_visuals(&cc.egui_ctx, settings.general.dark_mode);

        let mut state = AppState::new(settings);

        // Pick up the last saved report, if any
        if state.settings.general.load_on_startup {
            match slot::load() {
                Ok(Some(record)) => {
                    state.form.populate(&record);
                    tracing::info!("Loaded saved report (page {})", state.form.page);
                }
                Ok(None) => {}
                Err(e) => tracing::warn!("Could not load saved report: {}", e),
            }
        }

        Self {
            state,
            settings_window: SettingsWindow::new(),
            menu_receiver,
            menu,
        }
    }
}

impl eframe::App for ReportApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Handle menu events
        self.handle_menu_events(ctx);

        // Handle keyboard shortcuts
        self.handle_shortcuts(ctx);

        self.state.ui.prune_notices();

        // Show settings window if open
        if self.state.settings_open {
            if let Some(ref mut pending) = self.state.settings_pending {
                let dark_mode = pending.general.dark_mode;
                let result = self.settings_window.show(ctx, pending, dark_mode);

                match result {
                    SettingsResult::Open => {}
                    SettingsResult::Apply => {
                        self.state.close_settings(true);
                        apply_visuals(ctx, self.state.settings.general.dark_mode);
                        // Save settings to disk
                        if let Err(e) = save_settings(&self.state.settings) {
                            tracing::error!("Failed to save settings: {}", e);
                            self.state.ui.push_error(format!("Could not save settings: {e}"));
                        }
                    }
                    SettingsResult::Cancel => {
                        self.state.close_settings(false);
                    }
                }
            }
        }

        // Confirmation dialog for destructive actions
        if let Some(action) = views::confirm::show(ctx, &mut self.state.ui) {
            match action {
                ConfirmAction::ClearCells => self.state.form.clear_cells(),
                ConfirmAction::ResetAll => self.state.form.reset(),
            }
        }

        // Supplier dialog
        let supplier_action =
            views::suppliers::show(ctx, &mut self.state.form, &mut self.state.ui);

        // Toolbar
        let mut toolbar_action = None;
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            toolbar_action = views::toolbar::show(ui, &self.state.form);
        });

        // Rail panel
        if self.state.settings.display.show_rail {
            egui::SidePanel::right("rail")
                .resizable(false)
                .default_width(200.0)
                .show(ctx, |ui| {
                    views::rail::show(ui, &self.state.form);
                });
        }

        // Main panel: metadata inputs + grid
        let striped = self.state.settings.display.striped_rows;
        egui::CentralPanel::default().show(ctx, |ui| {
            views::header::show(ui, &mut self.state.form);
            ui.add_space(spacing::SM);
            ui.separator();
            views::grid::show(ui, &mut self.state.form, striped);
        });

        // Notices on top of everything
        views::notices::show(ctx, &mut self.state.ui);
        if !self.state.ui.notices.is_empty() {
            // Keep repainting so expiry happens without further input
            ctx.request_repaint_after(std::time::Duration::from_millis(250));
        }

        // Dispatch deferred actions
        if let Some(SuppliersAction::SaveAndClose) = supplier_action {
            self.save_report();
        }
        if let Some(action) = toolbar_action {
            self.dispatch_toolbar(action);
        }
    }
}

impl ReportApp {
    /// Handle menu events from the native menu bar
    fn handle_menu_events(&mut self, ctx: &egui::Context) {
        while let Ok(event) = self.menu_receiver.try_recv() {
            let id = event.id().0.as_str();
            tracing::debug!("Menu event: {}", id);

            match id {
                menu::ids::SAVE_REPORT => self.save_report(),
                menu::ids::LOAD_SAVED => self.load_saved(),
                menu::ids::BACKUP => self.backup_report(),
                menu::ids::RESTORE => self.restore_report(),
                menu::ids::SETTINGS => {
                    if !self.state.settings_open {
                        self.state.open_settings();
                    }
                }
                menu::ids::EXIT => {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
                menu::ids::ABOUT => {
                    self.state.ui.push_info(format!(
                        "Daily Report Studio {}",
                        env!("CARGO_PKG_VERSION")
                    ));
                }
                _ => {
                    tracing::debug!("Unknown menu event: {}", id);
                }
            }

            // Request repaint after menu event
            ctx.request_repaint();
        }
    }

    /// Handle global keyboard shortcuts
    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        // Use Cmd on macOS, Ctrl on other platforms
        let modifiers = ctx.input(|i| i.modifiers);
        let cmd_or_ctrl = if cfg!(target_os = "macos") {
            modifiers.command
        } else {
            modifiers.ctrl
        };

        // Collect first; file dialogs must not run inside the input lock
        let mut save = false;
        let mut restore = false;
        let mut open_settings = false;
        let mut escape = false;

        ctx.input(|i| {
            if cmd_or_ctrl && i.key_pressed(egui::Key::S) {
                save = true;
            }
            if cmd_or_ctrl && i.key_pressed(egui::Key::O) {
                restore = true;
            }
            if cmd_or_ctrl && i.key_pressed(egui::Key::Comma) {
                open_settings = true;
            }
            if i.key_pressed(egui::Key::Escape) {
                escape = true;
            }
        });

        if save {
            self.save_report();
        }
        if restore {
            self.restore_report();
        }
        if open_settings && !self.state.settings_open {
            self.state.open_settings();
        }
        if escape {
            // Close the topmost surface only
            if self.state.settings_open {
                self.state.close_settings(false);
            } else if self.state.ui.confirm.is_some() {
                self.state.ui.confirm = None;
            } else if self.state.ui.suppliers_open {
                self.state.ui.suppliers_open = false;
            }
        }
    }

    fn dispatch_toolbar(&mut self, action: ToolbarAction) {
        match action {
            ToolbarAction::Save => self.save_report(),
            ToolbarAction::Backup => self.backup_report(),
            ToolbarAction::Restore => self.restore_report(),
            ToolbarAction::Generate => {
                let message = self.state.form.summary_message();
                self.state.ui.push_info(message);
            }
            ToolbarAction::ManageSuppliers => self.state.ui.suppliers_open = true,
            ToolbarAction::PagePlus => self.state.form.increment_page(),
            ToolbarAction::Clear => self.state.ui.confirm = Some(ConfirmAction::ClearCells),
            ToolbarAction::Reset => self.state.ui.confirm = Some(ConfirmAction::ResetAll),
        }
    }

    /// Save the current form to the report slot
    fn save_report(&mut self) {
        let record = self.state.form.collect();
        match slot::save(&record) {
            Ok(path) => {
                tracing::info!("Saved report to {}", path.display());
                self.state.ui.push_info("Saved report.");
            }
            Err(e) => {
                tracing::error!("Failed to save report: {}", e);
                self.state.ui.push_error(format!("Could not save report: {e}"));
            }
        }
    }

    /// Populate the form from the report slot
    fn load_saved(&mut self) {
        match slot::load() {
            Ok(Some(record)) => {
                self.state.form.populate(&record);
                self.state.ui.push_info("Loaded saved report.");
            }
            Ok(None) => {
                self.state.ui.push_info("No saved report yet.");
            }
            Err(e) => {
                tracing::error!("Failed to load saved report: {}", e);
                self.state.ui.push_error(format!("Could not load saved report: {e}"));
            }
        }
    }

    /// Export the current form to a user-chosen backup file
    fn backup_report(&mut self) {
        let suggested = backup_file_name(chrono::Local::now().date_naive());
        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name(&suggested)
            .save_file()
        else {
            return;
        };

        let record = self.state.form.collect();
        match write_backup(&path, &record) {
            Ok(()) => {
                self.state.ui.push_info("Backup written.");
            }
            Err(e) => {
                tracing::error!("Failed to write backup: {}", e);
                self.state.ui.push_error(format!("Could not write backup: {e}"));
            }
        }
    }

    /// Restore the form from a user-chosen backup file
    fn restore_report(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .pick_file()
        else {
            return;
        };

        match read_backup(&path) {
            Ok(record) => {
                self.state.form.populate(&record);
                self.state.ui.push_info("Backup restored into the form.");
            }
            Err(e) => {
                // State stays untouched on a bad document
                tracing::warn!("Failed to restore backup from {}: {}", path.display(), e);
                self.state.ui.push_error("Invalid backup file.");
            }
        }
    }
}

fn apply_visuals(ctx: &egui::Context, dark_mode: bool) {
    if dark_mode {
        ctx.set_visuals(egui::Visuals::dark());
    } else {
        ctx.set_visuals(egui::Visuals::light());
    }
}
