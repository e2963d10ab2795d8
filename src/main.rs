// src/main.rs
use eframe::egui;
use anyhow::Result;
use tracing::{info, warn};

mod analysis;
mod app;
mod config;
mod file;
mod state;
mod ui;
mod utils;

use app::CorkApp;
use config::AppSettings;

fn main() -> Result<()> {
    let loaded = AppSettings::load();
    let settings = loaded.as_ref().cloned().unwrap_or_default();
    utils::logger::init_logger(&settings.log_filter);

    if let Err(e) = &loaded {
        warn!("Using default settings: {:#}", e);
    }
    info!(version = env!("CARGO_PKG_VERSION"), "starting Federica Cork Analytics");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.window_width, settings.window_height])
            .with_title("Federica Cork Analytics"),
        ..Default::default()
    };

    eframe::run_native(
        "Federica Cork Analytics",
        options,
        Box::new(move |cc| Box::new(CorkApp::new(cc, settings))),
    ).map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
