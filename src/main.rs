#![deny(missing_docs)]

//! Sample app: drag people onto each other in a scrollable list.
use dragdrop::config;
use dragdrop::egui_app::ui::{EguiApp, MIN_VIEWPORT_SIZE};
use dragdrop::logging;
use eframe::egui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size(egui::vec2(420.0, 760.0))
        .with_min_inner_size(MIN_VIEWPORT_SIZE);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Drag & Drop Sample",
        native_options,
        Box::new(|_cc| match config::load_or_default() {
            Ok(config) => Ok(Box::new(EguiApp::new(config))),
            Err(err) => {
                tracing::error!("Failed to load config: {err}");
                Ok(Box::new(LaunchError {
                    message: format!("Failed to load config: {err}"),
                }))
            }
        }),
    )?;
    Ok(())
}

/// Minimal fallback app to display initialization errors.
struct LaunchError {
    message: String,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Failed to start UI");
                ui.label(&self.message);
            });
        });
    }
}
