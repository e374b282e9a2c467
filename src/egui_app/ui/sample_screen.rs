use super::style;
use super::{EguiApp, draggable_item};
use crate::dragdrop::{DragSourceExt, DropTarget, LongPressDraggable};
use crate::egui_app::view_model::Item;
use eframe::egui::{Frame, Label, Margin, Response, ScrollArea, TextStyle, Ui};

/// Inner padding of each row.
const ROW_PADDING: i8 = 32;

impl EguiApp {
    pub(super) fn render_sample_screen(&mut self, ui: &mut Ui) {
        let items = self.view_model.state().items.clone();
        let lazy = self.config.sample.lazy_list;
        let scroll = &self.scroll;
        let mut drops: Vec<(String, String)> = Vec::new();

        LongPressDraggable::new(scroll)
            .config(self.config.drag.clone())
            .id_salt("sample_region")
            .show(ui, draggable_item::show, |ui| {
                ui.spacing_mut().item_spacing.y = 0.0;
                let area = ScrollArea::vertical()
                    .id_salt("sample_list")
                    .auto_shrink([false, false])
                    .drag_to_scroll(false);
                let output = if lazy {
                    let row_height = row_height(ui);
                    area.show_rows(ui, row_height, items.len(), |ui, range| {
                        for item in &items[range] {
                            source_target_item(ui, item, &mut drops);
                        }
                    })
                } else {
                    area.show(ui, |ui| {
                        for item in &items {
                            source_target_item(ui, item, &mut drops);
                        }
                    })
                };
                scroll.attach(&output);
            });

        for (source, target) in drops {
            self.view_model.on_drop(&source, &target);
        }
    }
}

fn row_height(ui: &Ui) -> f32 {
    ui.text_style_height(&TextStyle::Body) + 2.0 * f32::from(ROW_PADDING)
}

fn source_target_item(ui: &mut Ui, item: &Item, drops: &mut Vec<(String, String)>) {
    DropTarget::new(item.text.clone())
        .enabled(item.enabled)
        .highlight(style::palette().primary_container)
        .id_salt(&item.text)
        .show(ui, |ui, source| {
            if let Some(source) = source {
                drops.push((source, item.text.clone()));
            }
            let row = item_row(ui, &item.text);
            if item.enabled {
                row.drag_on_long_press(item.text.clone());
            }
        });
}

fn item_row(ui: &mut Ui, text: &str) -> Response {
    Frame::new()
        .stroke(style::row_border())
        .inner_margin(Margin::same(ROW_PADDING))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.add(Label::new(text).selectable(false));
            });
        })
        .response
}
