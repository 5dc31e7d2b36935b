//! Dashboard Main Application
//! Main window with sidebar navigation and the active page.

use crate::charts::{StaticChartRenderer, BAR_COLORS};
use crate::config::DashboardConfig;
use crate::data::{LeagueLoader, LeagueTables, LoadError};
use crate::gui::page_view::{ExportRequest, PageAction, PageView};
use crate::gui::sidebar::{Sidebar, SidebarAction};
use egui::SidePanel;
use std::sync::mpsc::{channel, Receiver};
use std::thread;
use tracing::{error, info, warn};

/// Table loading result from background thread
enum LoadResult {
    Complete(LeagueTables),
    Error(LoadError),
}

/// Main application window.
pub struct DashboardApp {
    config: DashboardConfig,
    tables: Option<LeagueTables>,
    sidebar: Sidebar,
    page_view: PageView,

    // Async table loading
    load_rx: Option<Receiver<LoadResult>>,
    is_loading: bool,
}

impl DashboardApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: DashboardConfig) -> Self {
        let mut app = Self {
            sidebar: Sidebar::new(config.data_dir.clone()),
            config,
            tables: None,
            page_view: PageView::new(),
            load_rx: None,
            is_loading: false,
        };
        app.start_load();
        app
    }

    /// Load all sources in a background thread.
    fn start_load(&mut self) {
        if self.is_loading {
            return;
        }

        let loader = LeagueLoader::new(self.config.source_paths());
        let (tx, rx) = channel();
        self.load_rx = Some(rx);
        self.is_loading = true;
        self.sidebar.loading = true;
        self.sidebar.set_status("Loading CSV files...");
        info!(data_dir = %self.config.data_dir.display(), "loading league tables");

        thread::spawn(move || {
            let result = match loader.load_all() {
                Ok(tables) => LoadResult::Complete(tables),
                Err(e) => LoadResult::Error(e),
            };
            let _ = tx.send(result);
        });
    }

    /// Check for loading results
    fn check_load_results(&mut self) {
        let Some(rx) = self.load_rx.take() else {
            return;
        };

        match rx.try_recv() {
            Ok(LoadResult::Complete(tables)) => {
                if let Err(e) = self.page_view.reset(&tables) {
                    warn!("failed to prepare selectors: {}", e);
                }
                self.sidebar.set_status(format!(
                    "Loaded {} teams, {} fixtures, {} players",
                    tables.standings.height(),
                    tables.fixtures.height(),
                    tables.player_stats.height()
                ));
                self.tables = Some(tables);
                self.finish_load();
            }
            Ok(LoadResult::Error(e)) => {
                error!(source = %e.source_table(), "load failed: {}", e);
                self.sidebar.set_error(format!("Error: {}", e));
                self.tables = None;
                self.finish_load();
            }
            Err(std::sync::mpsc::TryRecvError::Empty) => {
                self.load_rx = Some(rx);
            }
            Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                self.sidebar.set_error("Error: loader stopped unexpectedly");
                self.finish_load();
            }
        }
    }

    fn finish_load(&mut self) {
        self.is_loading = false;
        self.sidebar.loading = false;
    }

    fn handle_browse_data_dir(&mut self) {
        if let Some(dir) = rfd::FileDialog::new()
            .set_directory(&self.config.data_dir)
            .pick_folder()
        {
            self.config.data_dir = dir.clone();
            self.sidebar.data_dir = dir;
            self.start_load();
        }
    }

    /// Render the requested chart to PNG and open it.
    fn handle_export(&mut self, request: ExportRequest) {
        let file_name = format!("{}.png", request.title.to_lowercase().replace(' ', "_"));
        let output_path = match rfd::FileDialog::new()
            .add_filter("PNG Image", &["png"])
            .set_file_name(file_name)
            .save_file()
        {
            Some(path) => path,
            None => return, // User cancelled
        };

        let color = BAR_COLORS[request.slot % BAR_COLORS.len()];
        match StaticChartRenderer::render_ranked_bars_png(
            &output_path,
            &request.title,
            &request.x_label,
            &request.series,
            color,
        ) {
            Ok(()) => {
                self.sidebar
                    .set_status(format!("Exported {}", output_path.display()));
                if let Err(e) = open::that(&output_path) {
                    warn!("could not open exported chart: {}", e);
                }
            }
            Err(e) => {
                error!("chart export failed: {}", e);
                self.sidebar.set_error(format!("Export error: {}", e));
            }
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_load_results();

        // Request repaint while loading
        if self.is_loading {
            ctx.request_repaint();
        }

        // Left panel - Sidebar
        SidePanel::left("sidebar")
            .min_width(240.0)
            .max_width(300.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| match self.sidebar.show(ui) {
                    SidebarAction::BrowseDataDir => self.handle_browse_data_dir(),
                    SidebarAction::Reload => self.start_load(),
                    SidebarAction::None => {}
                });
            });

        // Central panel - active page
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label(
                egui::RichText::new("Football Analytics Dashboard")
                    .size(24.0)
                    .strong(),
            );
            ui.separator();

            let Some(tables) = &self.tables else {
                ui.centered_and_justified(|ui| {
                    ui.label(egui::RichText::new("No Data").size(20.0));
                });
                return;
            };

            let action = egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    self.page_view
                        .show(ui, self.sidebar.page, tables, &self.config.views)
                })
                .inner;

            if let PageAction::Export(request) = action {
                self.handle_export(request);
            }
        });
    }
}
