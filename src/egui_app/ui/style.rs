use crate::dragdrop::DraggableItemState;
use eframe::egui::{
    Color32, Stroke, Visuals,
    epaint::{CornerRadius, Shadow},
};

#[derive(Clone, Copy)]
pub struct Palette {
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub panel_outline: Color32,
    pub text_primary: Color32,
    pub text_dark: Color32,
    pub accent: Color32,
    pub primary_container: Color32,
    pub secondary_container: Color32,
}

pub fn palette() -> Palette {
    Palette {
        bg_primary: Color32::from_rgb(250, 252, 250),
        bg_secondary: Color32::from_rgb(238, 242, 239),
        panel_outline: Color32::from_rgb(196, 204, 199),
        text_primary: Color32::from_rgb(25, 28, 26),
        text_dark: Color32::from_rgb(10, 12, 11),
        accent: Color32::from_rgb(56, 107, 80),
        primary_container: Color32::from_rgb(186, 237, 206),
        secondary_container: Color32::from_rgb(207, 232, 215),
    }
}

pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.window_fill = palette.bg_primary;
    visuals.panel_fill = palette.bg_primary;
    visuals.override_text_color = Some(palette.text_primary);
    visuals.extreme_bg_color = palette.bg_secondary;
    visuals.faint_bg_color = palette.bg_secondary;
    visuals.selection.stroke = Stroke::new(1.0, palette.accent);
    visuals.window_corner_radius = CornerRadius::same(12);
    visuals.popup_shadow = Shadow::NONE;
}

/// Border drawn around each list row.
pub fn row_border() -> Stroke {
    Stroke::new(0.5, palette().secondary_container)
}

/// Background of the floating "Drag me" chip.
pub fn draggable_item_fill(state: DraggableItemState) -> Color32 {
    match state {
        DraggableItemState::Enabled => Color32::from_rgb(0xac, 0xf2, 0xc6),
        DraggableItemState::Disabled => Color32::from_rgb(0xf2, 0xba, 0xac),
        DraggableItemState::Initiated => Color32::from_rgb(0xcc, 0xdb, 0xd2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_item_state_has_its_own_fill() {
        let fills = [
            draggable_item_fill(DraggableItemState::Initiated),
            draggable_item_fill(DraggableItemState::Enabled),
            draggable_item_fill(DraggableItemState::Disabled),
        ];
        assert_ne!(fills[0], fills[1]);
        assert_ne!(fills[1], fills[2]);
        assert_ne!(fills[0], fills[2]);
    }
}
