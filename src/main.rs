#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide the console in release builds
// Entry point: window config and startup only, the rest lives in app.

use eframe::{egui, egui_wgpu::WgpuConfiguration};

mod app;
mod localization;
mod logger;
mod market;
mod types;
mod ui_constants;
mod views;

fn main() -> eframe::Result<()> {
    logger::init();
    app::settings::load_settings_from_disk();
    let preferred_lang = app::settings::with_settings(|s| s.language);
    if let Err(e) = localization::initialize_localization(preferred_lang) {
        log::error!("Localization initialization failed: {e}");
    }

    // Wgpu renderer with vsync off for the lowest input latency
    let wgpu_options = WgpuConfiguration {
        present_mode: eframe::wgpu::PresentMode::AutoNoVsync,
        ..Default::default()
    };
    let native_options = eframe::NativeOptions {
        renderer: eframe::Renderer::Wgpu,
        vsync: false,
        hardware_acceleration: eframe::HardwareAcceleration::Preferred,
        wgpu_options,
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([420.0, 480.0])
            .with_resizable(true),
        ..Default::default()
    };

    let res = eframe::run_native(
        localization::translate("app-window-title").as_str(),
        native_options,
        Box::new(|cc| Box::new(app::StoreApp::new(cc))),
    );
    if let Err(ref e) = res {
        log::error!("eframe::run_native failed: {e}");
    }
    res
}
