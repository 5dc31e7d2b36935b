//! Football Analytics Dashboard - sidebar-navigated league statistics.
//!
//! Usage: `football_dashboard [CONFIG.toml]`

use anyhow::Context;
use eframe::egui;
use football_dashboard::gui::DashboardApp;
use football_dashboard::DashboardConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = DashboardConfig::load(config_path.as_deref()).context("failed to load configuration")?;

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([1000.0, 700.0])
            .with_title("Football Analytics Dashboard"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Football Analytics Dashboard",
        options,
        Box::new(|cc| Ok(Box::new(DashboardApp::new(cc, config)))),
    )
    .map_err(|e| anyhow::anyhow!("dashboard exited with error: {e}"))
}
