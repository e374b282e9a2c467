use super::style;
use crate::dragdrop::DraggableItemState;
use eframe::egui::{Frame, Margin, RichText, Stroke, Ui};

/// "Drag me" chip that follows the pointer, tinted by what it hovers.
pub(super) fn show(ui: &mut Ui, state: DraggableItemState) {
    let palette = style::palette();
    Frame::new()
        .fill(style::draggable_item_fill(state))
        .stroke(Stroke::new(0.5, palette.accent))
        .corner_radius(4)
        .inner_margin(Margin::symmetric(16, 8))
        .show(ui, |ui| {
            ui.label(RichText::new("Drag me").color(palette.text_dark));
        });
}
