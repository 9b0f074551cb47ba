pub mod epochs;
pub mod graph;
pub mod loaded;

use anyhow::{anyhow, Result};
use eframe::egui;
use trajectory_core::{FetchController, ViewState};

use crate::config::StudioConfig;
use crate::gui::loaded::{LoadedView, ViewCache};

pub const APP_TITLE: &str = "Neural Network Visualization";

pub struct TrajectoryApp {
    // Declared before the runtime so it is torn down first.
    controller: Option<FetchController>,
    runtime: Option<tokio::runtime::Runtime>,
    cache: ViewCache,
    pub show_epochs: bool,
}

impl TrajectoryApp {
    /// Activates the page: issues the one fetch for this window.
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        runtime: tokio::runtime::Runtime,
        config: &StudioConfig,
    ) -> Self {
        tracing::info!("[GUI] Fetching from {}", config.backend_url);

        let ctx = cc.egui_ctx.clone();
        let controller =
            FetchController::activate(runtime.handle(), config.http_source(), move || {
                ctx.request_repaint()
            });

        Self {
            controller: Some(controller),
            runtime: Some(runtime),
            cache: ViewCache::default(),
            show_epochs: true,
        }
    }

    fn view(&self) -> ViewState {
        self.controller
            .as_ref()
            .map(FetchController::view)
            .unwrap_or_default()
    }
}

fn show_loaded(ui: &mut egui::Ui, view: &LoadedView, show_epochs: &mut bool) {
    if let Some(warning) = &view.mismatch {
        ui.colored_label(egui::Color32::YELLOW, warning);
    }

    epochs::show(ui, &view.summaries, show_epochs);
    ui.add_space(10.0);

    graph::line_chart(ui, &view.loss);
    ui.add_space(16.0);
    graph::grouped_bar_chart(ui, &view.probabilities);
}

impl eframe::App for TrajectoryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let state = self.view();
        let show_epochs = &mut self.show_epochs;
        let loaded = self.cache.sync(&state);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading(APP_TITLE);
                });
                ui.add_space(10.0);

                match (&state, loaded) {
                    (ViewState::Pending, _) => {
                        ui.horizontal(|ui| {
                            ui.spinner();
                            ui.label("Fetching training result...");
                        });
                    }
                    (_, Some(view)) => show_loaded(ui, view, show_epochs),
                    (_, None) => {
                        ui.label("No training data");
                    }
                }
            });
        });
    }
}

impl Drop for TrajectoryApp {
    fn drop(&mut self) {
        // Cancel first, then let any blocking request finish off-thread.
        self.controller.take();
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }
}

pub fn run(config: StudioConfig) -> Result<()> {
    // One worker thread runs the fetch continuation; the GET itself runs on
    // tokio's blocking pool.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_title(APP_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |cc| Box::new(TrajectoryApp::new(cc, runtime, &config))),
    )
    .map_err(|e| anyhow!("GUI Error: {}", e))
}
