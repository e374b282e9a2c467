use super::context::{current_region, with_state};
use super::payload::Payload;
use egui::{Response, Sense};
use std::any::Any;
use tracing::trace;

/// Modifier-style attachment that turns any widget into a drag source.
///
/// A press on the widget arms the enclosing region's long-press detector;
/// the region starts the drag once the press has been held long enough.
pub trait DragSourceExt {
    /// Carry `payload` when the widget is long-pressed and dragged.
    fn drag_on_long_press<T>(self, payload: T) -> Self
    where
        T: Any + Clone + PartialEq + Send + Sync;
}

impl DragSourceExt for Response {
    fn drag_on_long_press<T>(self, payload: T) -> Self
    where
        T: Any + Clone + PartialEq + Send + Sync,
    {
        let response = self.interact(Sense::click_and_drag());
        let ctx = response.ctx.clone();
        let Some(region) = current_region(&ctx) else {
            trace!("Drag source {:?} rendered outside a drag region", response.id);
            return response;
        };
        if !response.is_pointer_button_down_on() {
            return response;
        }
        let (origin, started_at, primary_down) = ctx.input(|i| {
            (
                i.pointer.press_origin().or(i.pointer.latest_pos()),
                i.pointer.press_start_time().unwrap_or(i.time),
                i.pointer.primary_down(),
            )
        });
        let Some(origin) = origin.filter(|_| primary_down) else {
            return response;
        };
        let id = response.id;
        let armed = with_state(&ctx, region, |state| {
            !state.is_dragging()
                && state.detector.is_idle()
                && state.arm(id, Payload::new(payload), origin, started_at)
        });
        if armed {
            trace!("Drag source {:?} armed at {:?}", id, origin);
        }
        response
    }
}
