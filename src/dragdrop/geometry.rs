//! Pure placement math for the drag region.

use super::item_state::ScrollDirection;
use egui::{Pos2, Rect, Vec2, pos2};

/// Auto-scroll direction for a drag position inside `container`.
///
/// Up only in the upper half within `margin` of the top edge, down only in the
/// lower half within `margin` of the bottom edge.
pub fn scroll_direction(container: Rect, pos: Pos2, margin: f32) -> ScrollDirection {
    let center_y = container.center().y;
    if pos.y < center_y && (container.top() - pos.y).abs() <= margin {
        ScrollDirection::Up
    } else if pos.y > center_y && container.bottom() - pos.y < margin {
        ScrollDirection::Down
    } else {
        ScrollDirection::None
    }
}

/// Top-left corner of the floating visual.
///
/// The visual is centred horizontally on the pointer and lifted above it by
/// `lift`, then kept inside `container`.
pub fn overlay_position(pos: Pos2, container: Rect, item_size: Vec2, lift: f32) -> Pos2 {
    let x = pos.x - item_size.x / 2.0;
    let y = pos.y - (item_size.y + lift);
    pos2(
        clamp_axis(x, container.left(), container.right() - item_size.x),
        clamp_axis(y, container.top(), container.bottom() - item_size.y),
    )
}

// An item larger than the container pins to its min edge.
fn clamp_axis(value: f32, min: f32, max: f32) -> f32 {
    value.min(max).max(min)
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::vec2;

    fn container() -> Rect {
        Rect::from_min_size(pos2(0.0, 100.0), vec2(400.0, 1000.0))
    }

    #[test]
    fn near_top_above_center_scrolls_up() {
        assert_eq!(
            scroll_direction(container(), pos2(50.0, 150.0), 200.0),
            ScrollDirection::Up
        );
    }

    #[test]
    fn near_bottom_below_center_scrolls_down() {
        assert_eq!(
            scroll_direction(container(), pos2(50.0, 1050.0), 200.0),
            ScrollDirection::Down
        );
    }

    #[test]
    fn middle_band_does_not_scroll() {
        assert_eq!(
            scroll_direction(container(), pos2(50.0, 600.0), 200.0),
            ScrollDirection::None
        );
        assert_eq!(
            scroll_direction(container(), pos2(50.0, 301.0), 200.0),
            ScrollDirection::None
        );
    }

    #[test]
    fn margin_wider_than_half_never_flips_direction() {
        let small = Rect::from_min_size(pos2(0.0, 0.0), vec2(100.0, 100.0));
        assert_eq!(
            scroll_direction(small, pos2(10.0, 40.0), 200.0),
            ScrollDirection::Up
        );
        assert_eq!(
            scroll_direction(small, pos2(10.0, 60.0), 200.0),
            ScrollDirection::Down
        );
        assert_eq!(
            scroll_direction(small, pos2(10.0, 50.0), 200.0),
            ScrollDirection::None
        );
    }

    #[test]
    fn overlay_sits_above_pointer() {
        let placed = overlay_position(pos2(200.0, 600.0), container(), vec2(80.0, 30.0), 20.0);
        assert_eq!(placed, pos2(160.0, 550.0));
    }

    #[test]
    fn overlay_is_clamped_into_container() {
        let item = vec2(80.0, 30.0);
        let top_left = overlay_position(pos2(5.0, 110.0), container(), item, 20.0);
        assert_eq!(top_left, pos2(0.0, 100.0));
        let bottom_right = overlay_position(pos2(399.0, 5000.0), container(), item, 20.0);
        assert_eq!(bottom_right, pos2(320.0, 1070.0));
    }

    #[test]
    fn oversized_overlay_pins_to_min_edge() {
        let placed = overlay_position(pos2(50.0, 500.0), container(), vec2(900.0, 30.0), 20.0);
        assert_eq!(placed.x, 0.0);
    }
}
