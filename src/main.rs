mod app;
mod chart;
mod color;
mod config;
mod data;
mod state;
mod ui;

use std::sync::Arc;

use anyhow::{Context, Result};
use app::BabyNamesApp;
use config::DashboardConfig;
use eframe::egui;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = DashboardConfig::default();

    // The table is loaded exactly once, before any window exists.
    let dataset = data::loader::load(&config.source)
        .with_context(|| format!("loading dataset from {}", config.source))?;
    log::info!(
        "Loaded {} records covering {} names",
        dataset.len(),
        dataset.names().len()
    );
    let dataset = Arc::new(dataset);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.title.as_str())
            .with_inner_size(config.window_size)
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    let title = config.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(BabyNamesApp::new(dataset, config)))),
    )
    .map_err(|e| anyhow::anyhow!("running dashboard: {e}"))
}
