//! Daily Report Studio - Desktop Application
//!
//! A desktop editor for a recurring daily store quality report: a fixed
//! 12-row grid, report metadata, a supplier list, and JSON save/backup/restore.

use eframe::egui;
use report_gui::app::ReportApp;
use report_gui::menu;

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Daily Report Studio")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([1024.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Daily Report Studio",
        options,
        Box::new(|cc| {
            // The native menu can only be attached once the event loop is up.
            let menu = menu::create_menu();
            menu::init_menu_for_nsapp(&menu);
            let menu_receiver = menu::menu_event_receiver();
            Ok(Box::new(ReportApp::new(cc, menu_receiver, menu)))
        }),
    )
}
