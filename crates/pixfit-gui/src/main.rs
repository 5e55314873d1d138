#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // Hide console on Windows

mod app;
mod config;
mod state;
mod theme;
mod widgets;
mod worker;

use app::PixFitApp;

/// Env-filter directives for every crate that logs. Prefix matching in
/// the filter stops at a `::` boundary, so the library crates need their
/// own directives next to the binary's.
const LOG_FILTER: &str = "pixfit=info,pixfit_core=info";

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(LOG_FILTER)
        .with_target(false)
        .without_time()
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([720.0, 540.0])
            .with_icon(load_icon()),
        ..Default::default()
    };

    eframe::run_native(
        "PixFit - Image Resizer",
        options,
        Box::new(|cc| Ok(Box::new(PixFitApp::new(cc)))),
    )
}


fn load_icon() -> egui::IconData {
    // Placeholder: 32x32 teal icon
    let icon_data = vec![45, 212, 191, 255]; // RGBA for primary color
    let icon_pixels = vec![icon_data; 32 * 32].into_iter().flatten().collect();

    egui::IconData {
        rgba: icon_pixels,
        width: 32,
        height: 32,
    }
}
