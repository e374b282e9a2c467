use super::EguiApp;
use eframe::egui::{self, Align2};

impl EguiApp {
    pub(super) fn render_drop_dialog(&mut self, ctx: &egui::Context) {
        let state = self.view_model.state();
        if !state.drop_dialog_visible {
            return;
        }
        let message = state.dialog_message.clone();
        let mut open = true;
        let mut close = false;
        egui::Window::new("Dropped")
            .anchor(Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .collapsible(false)
            .resizable(false)
            .auto_sized()
            .open(&mut open)
            .show(ctx, |ui| {
                ui.set_min_width(240.0);
                ui.label(message);
                ui.add_space(12.0);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    if ui.button("Close").clicked() {
                        close = true;
                    }
                });
            });
        if close || !open {
            self.view_model.close_dialog();
        }
    }
}
