//! Edge auto-scroll while dragging.

use super::item_state::ScrollDirection;
use super::settings::DragDropConfig;
use egui::{Context, Id, scroll_area::ScrollAreaOutput};
use std::cell::Cell;

/// Longest stretch of time a single pass may account for.
const MAX_TICK_SECS: f64 = 0.1;

/// Something the region can scroll while a drag hovers its edges.
pub trait ScrollableState {
    /// Scroll by `delta` points along the vertical axis; negative scrolls up.
    fn scroll_by(&self, ctx: &Context, delta: f32);
}

/// Drives an `egui::ScrollArea` through its persisted state.
///
/// Bind it to the scroll area each pass with [`ScrollAreaHandle::attach`];
/// offsets written here are picked up by the area on the next pass.
#[derive(Debug, Default)]
pub struct ScrollAreaHandle {
    id: Cell<Option<Id>>,
    /// Largest vertical offset seen on the last attach.
    max_offset: Cell<Option<f32>>,
}

impl ScrollAreaHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach<R>(&self, output: &ScrollAreaOutput<R>) {
        self.id.set(Some(output.id));
        let max = (output.content_size.y - output.inner_rect.height()).max(0.0);
        self.max_offset.set(Some(max));
    }

    pub fn max_offset(&self) -> Option<f32> {
        self.max_offset.get()
    }

    pub fn id(&self) -> Option<Id> {
        self.id.get()
    }

    pub fn offset(&self, ctx: &Context) -> Option<f32> {
        let id = self.id.get()?;
        egui::scroll_area::State::load(ctx, id).map(|state| state.offset.y)
    }
}

impl ScrollableState for ScrollAreaHandle {
    fn scroll_by(&self, ctx: &Context, delta: f32) {
        let Some(id) = self.id.get() else {
            return;
        };
        let Some(mut state) = egui::scroll_area::State::load(ctx, id) else {
            return;
        };
        let max = self.max_offset.get().unwrap_or(f32::INFINITY);
        state.offset.y = (state.offset.y + delta).clamp(0.0, max);
        state.store(ctx, id);
    }
}

/// Repeating scroll steps with linear acceleration.
///
/// Each step scrolls `step * speed` and then grows `speed` by the
/// configured acceleration. Steps are paced by the configured interval
/// regardless of frame rate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AutoScroller {
    speed: f32,
    last_tick: Option<f64>,
    carry: f64,
}

impl Default for AutoScroller {
    fn default() -> Self {
        Self {
            speed: 1.0,
            last_tick: None,
            carry: 0.0,
        }
    }
}

impl AutoScroller {
    pub fn is_active(&self) -> bool {
        self.last_tick.is_some()
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Scroll delta owed for this pass.
    pub fn tick(&mut self, direction: ScrollDirection, now: f64, config: &DragDropConfig) -> f32 {
        if direction == ScrollDirection::None {
            self.cancel();
            return 0.0;
        }
        let Some(last) = self.last_tick.replace(now) else {
            return self.step(direction, config);
        };
        self.carry += (now - last).clamp(0.0, MAX_TICK_SECS);
        let interval = config.auto_scroll_interval_secs();
        let mut delta = 0.0;
        while self.carry >= interval {
            self.carry -= interval;
            delta += self.step(direction, config);
        }
        delta
    }

    pub fn cancel(&mut self) {
        *self = Self::default();
    }

    fn step(&mut self, direction: ScrollDirection, config: &DragDropConfig) -> f32 {
        let delta = direction.sign() * config.auto_scroll_step * self.speed;
        self.speed += config.auto_scroll_acceleration;
        if let Some(max) = config.auto_scroll_max_speed {
            self.speed = self.speed.min(max);
        }
        delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attached_handle(ctx: &Context, content_height: f32) -> ScrollAreaHandle {
        let handle = ScrollAreaHandle::new();
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(200.0, 300.0),
            )),
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let output = egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.allocate_space(egui::vec2(100.0, content_height));
                    });
                handle.attach(&output);
            });
        });
        handle
    }

    #[test]
    fn handle_keeps_offset_within_content() {
        let ctx = Context::default();
        let handle = attached_handle(&ctx, 1000.0);
        let max = handle.max_offset().unwrap_or_default();
        assert!(max > 0.0);

        handle.scroll_by(&ctx, 5000.0);
        assert_eq!(handle.offset(&ctx), Some(max));
        handle.scroll_by(&ctx, 5000.0);
        assert_eq!(handle.offset(&ctx), Some(max));
        handle.scroll_by(&ctx, -9000.0);
        assert_eq!(handle.offset(&ctx), Some(0.0));
    }

    #[test]
    fn handle_does_not_scroll_content_that_fits() {
        let ctx = Context::default();
        let handle = attached_handle(&ctx, 50.0);
        assert_eq!(handle.max_offset(), Some(0.0));
        handle.scroll_by(&ctx, 40.0);
        assert_eq!(handle.offset(&ctx), Some(0.0));
    }

    fn config() -> DragDropConfig {
        DragDropConfig {
            auto_scroll_step: 2.0,
            auto_scroll_interval_ms: 10,
            auto_scroll_acceleration: 0.5,
            ..DragDropConfig::default()
        }
    }

    #[test]
    fn first_tick_scrolls_one_step() {
        let mut scroller = AutoScroller::default();
        assert_eq!(scroller.tick(ScrollDirection::Down, 0.0, &config()), 2.0);
        assert!(scroller.is_active());
        assert_eq!(scroller.speed(), 1.5);
    }

    #[test]
    fn speed_grows_linearly_per_step() {
        let config = config();
        let mut scroller = AutoScroller::default();
        scroller.tick(ScrollDirection::Up, 0.0, &config);
        // Two more steps at speed 1.5 and 2.0.
        let delta = scroller.tick(ScrollDirection::Up, 0.025, &config);
        assert_eq!(delta, -(2.0 * 1.5 + 2.0 * 2.0));
        assert_eq!(scroller.speed(), 2.5);
    }

    #[test]
    fn leaving_margin_resets_speed() {
        let config = config();
        let mut scroller = AutoScroller::default();
        scroller.tick(ScrollDirection::Down, 0.0, &config);
        scroller.tick(ScrollDirection::Down, 0.05, &config);
        assert!(scroller.speed() > 1.0);
        assert_eq!(scroller.tick(ScrollDirection::None, 0.06, &config), 0.0);
        assert!(!scroller.is_active());
        assert_eq!(scroller.speed(), 1.0);
    }

    #[test]
    fn stalled_frame_is_clamped() {
        let config = config();
        let mut scroller = AutoScroller::default();
        scroller.tick(ScrollDirection::Down, 0.0, &config);
        scroller.tick(ScrollDirection::Down, 30.0, &config);
        // Roughly 100 ms worth of steps at 10 ms intervals, not 30 s.
        assert!(scroller.speed() <= 1.5 + 10.0 * 0.5);
        assert!(scroller.speed() >= 1.5 + 9.0 * 0.5);
    }

    #[test]
    fn max_speed_caps_acceleration() {
        let config = DragDropConfig {
            auto_scroll_max_speed: Some(2.0),
            ..config()
        };
        let mut scroller = AutoScroller::default();
        scroller.tick(ScrollDirection::Down, 0.0, &config);
        scroller.tick(ScrollDirection::Down, 0.1, &config);
        assert_eq!(scroller.speed(), 2.0);
    }
}
