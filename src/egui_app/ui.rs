//! egui renderer for the drag-and-drop sample.
mod draggable_item;
mod drop_dialog;
mod sample_screen;
pub mod style;

use crate::config::{self, AppConfig};
use crate::dragdrop::ScrollAreaHandle;
use crate::egui_app::view_model::DragDropSampleViewModel;
use eframe::egui::{self, Frame, Margin, RichText};
use tracing::warn;

/// Smallest window the sample lays out sensibly in.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(320.0, 420.0);

/// Renders the sample screen and owns its view model.
pub struct EguiApp {
    view_model: DragDropSampleViewModel,
    config: AppConfig,
    scroll: ScrollAreaHandle,
    persist_config: bool,
    visuals_set: bool,
}

impl EguiApp {
    pub fn new(config: AppConfig) -> Self {
        Self {
            view_model: DragDropSampleViewModel::new(),
            config,
            scroll: ScrollAreaHandle::new(),
            persist_config: true,
            visuals_set: false,
        }
    }

    /// App that never writes its config back to disk.
    pub fn ephemeral(config: AppConfig, view_model: DragDropSampleViewModel) -> Self {
        Self {
            view_model,
            persist_config: false,
            ..Self::new(config)
        }
    }

    pub fn view_model(&self) -> &DragDropSampleViewModel {
        &self.view_model
    }

    pub fn scroll(&self) -> &ScrollAreaHandle {
        &self.scroll
    }

    /// Render one pass of the whole screen.
    pub fn ui(&mut self, ctx: &egui::Context) {
        self.render_top_bar(ctx);
        egui::CentralPanel::default()
            .frame(Frame::new().fill(style::palette().bg_primary))
            .show(ctx, |ui| self.render_sample_screen(ui));
        self.render_drop_dialog(ctx);
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::light();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_top_bar(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::top("top_bar")
            .frame(
                Frame::new()
                    .fill(palette.bg_secondary)
                    .inner_margin(Margin::symmetric(12, 8))
                    .stroke(egui::Stroke::new(1.0, palette.panel_outline)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("Long-press a person to drag").strong());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let mut lazy = self.config.sample.lazy_list;
                        if ui.checkbox(&mut lazy, "Lazy list").changed() {
                            self.set_lazy_list(lazy);
                        }
                    });
                });
            });
    }

    fn set_lazy_list(&mut self, lazy: bool) {
        self.config.sample.lazy_list = lazy;
        if !self.persist_config {
            return;
        }
        if let Err(err) = config::save(&self.config) {
            warn!("Failed to save config: {err}");
        }
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.ui(ctx);
    }
}
