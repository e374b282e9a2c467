use super::auto_scroll::ScrollableState;
use super::context::{with_region, with_state};
use super::geometry::{overlay_position, scroll_direction};
use super::gesture::{GestureEvent, PointerSample};
use super::item_state::{DraggableItemState, ScrollDirection};
use super::settings::DragDropConfig;
use super::state::DropOutcome;
use egui::{Area, Context, Event, Id, InnerResponse, Key, Order, Rect, Ui, UiBuilder, Vec2};
use std::time::Duration;
use tracing::debug;

/// Pointer input relevant to the gesture, captured once per pass.
struct PointerSnapshot {
    sample: PointerSample,
    interrupted: bool,
}

impl PointerSnapshot {
    fn capture(ctx: &Context) -> Self {
        ctx.input(|i| {
            let primary_down = i.pointer.primary_down();
            // Touch backends follow a release with `PointerGone` in the same
            // frame; that still ends the drag normally.
            let pointer_lost = i.events.iter().any(|event| match event {
                Event::PointerGone => primary_down,
                Event::WindowFocused(focused) => !*focused,
                _ => false,
            });
            Self {
                sample: PointerSample {
                    time: i.time,
                    pos: i.pointer.latest_pos(),
                    primary_down,
                },
                interrupted: i.key_pressed(Key::Escape) || pointer_lost,
            }
        })
    }
}

/// Outcome of one pass of a drag region.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DragRegionOutput {
    pub dragging: bool,
    pub scroll_direction: ScrollDirection,
    /// Set on the pass a drag ended or was cancelled.
    pub finished: Option<DropOutcome>,
}

/// Area within which long-press drags and drop targets are coordinated.
///
/// Holds the drag state, renders the floating visual above its content and
/// auto-scrolls `scroll` while the drag sits near the top or bottom edge.
#[must_use = "call `show` to render the drag region"]
pub struct LongPressDraggable<'a, S: ScrollableState + ?Sized> {
    scroll: &'a S,
    config: DragDropConfig,
    id_salt: Id,
}

impl<'a, S: ScrollableState + ?Sized> LongPressDraggable<'a, S> {
    pub fn new(scroll: &'a S) -> Self {
        Self {
            scroll,
            config: DragDropConfig::default(),
            id_salt: Id::new("dragdrop_region"),
        }
    }

    pub fn config(mut self, config: DragDropConfig) -> Self {
        self.config = config;
        self
    }

    pub fn id_salt(mut self, salt: impl std::hash::Hash) -> Self {
        self.id_salt = Id::new(salt);
        self
    }

    /// Render `content` filling the available space, with `draggable_item`
    /// drawn under the pointer while a drag is active.
    pub fn show<R>(
        self,
        ui: &mut Ui,
        draggable_item: impl FnOnce(&mut Ui, DraggableItemState),
        content: impl FnOnce(&mut Ui) -> R,
    ) -> InnerResponse<(R, DragRegionOutput)> {
        let id = ui.make_persistent_id(self.id_salt);
        let ctx = ui.ctx().clone();
        let pass = ctx.cumulative_pass_nr();
        let container = ui.available_rect_before_wrap();

        let finished = self.process_input(&ctx, id, pass);

        let InnerResponse { inner, response } = with_region(&ctx, id, || {
            ui.scope_builder(UiBuilder::new().max_rect(container), content)
        });

        let (dragging, direction) = self.settle(&ctx, id, pass, container);
        if dragging {
            self.show_floating_item(&ctx, id, container, draggable_item);
        }

        let output = DragRegionOutput {
            dragging,
            scroll_direction: direction,
            finished,
        };
        InnerResponse::new((inner, output), response)
    }

    /// Feed this pass's pointer state to the gesture detector.
    fn process_input(&self, ctx: &Context, id: Id, pass: u64) -> Option<DropOutcome> {
        let snapshot = PointerSnapshot::capture(ctx);
        with_state(ctx, id, |state| {
            state.expire_pending_drop(pass);
            state
                .detector
                .set_thresholds(self.config.long_press_secs(), self.config.touch_slop);
            let event = if snapshot.interrupted {
                state.detector.interrupt()
            } else {
                state.detector.update(snapshot.sample)
            };
            let outcome = event.and_then(|event| {
                if matches!(event, GestureEvent::Started { .. }) {
                    debug!("Long press recognised at {:?}", snapshot.sample.pos);
                }
                state.apply_gesture(event, pass)
            });
            if state.detector.is_idle() {
                state.candidate = None;
            }
            outcome
        })
    }

    /// Prune stale hover reports, derive the scroll direction and advance auto-scroll.
    fn settle(
        &self,
        ctx: &Context,
        id: Id,
        pass: u64,
        container: Rect,
    ) -> (bool, ScrollDirection) {
        let now = ctx.input(|i| i.time);
        let (dragging, direction, delta, pending_wait) = with_state(ctx, id, |state| {
            state.prune_hovered(pass);
            let direction = if state.is_dragging() {
                scroll_direction(container, state.drag_position(), self.config.edge_margin)
            } else {
                ScrollDirection::None
            };
            state.set_scroll_direction(direction);
            let delta = if state.is_dragging() {
                state.auto_scroller.tick(direction, now, &self.config)
            } else {
                state.auto_scroller.cancel();
                0.0
            };
            let pending_wait = state.detector.remaining(now);
            (state.is_dragging(), direction, delta, pending_wait)
        });
        // A held press must be re-evaluated even if the pointer never moves.
        if let Some(wait) = pending_wait {
            ctx.request_repaint_after(Duration::from_secs_f64(wait));
        }
        if delta != 0.0 {
            self.scroll.scroll_by(ctx, delta);
        }
        if dragging {
            ctx.request_repaint();
        }
        (dragging, direction)
    }

    fn show_floating_item(
        &self,
        ctx: &Context,
        id: Id,
        container: Rect,
        draggable_item: impl FnOnce(&mut Ui, DraggableItemState),
    ) {
        let (position, size, item_state) = with_state(ctx, id, |state| {
            (
                state.drag_position(),
                state.visual_size,
                state.draggable_item_state(),
            )
        });
        let alpha = if size == Vec2::ZERO {
            0.0
        } else {
            self.config.overlay_alpha
        };
        let top_left = overlay_position(position, container, size, self.config.overlay_lift);
        let area = Area::new(id.with("floating_item"))
            .order(Order::Tooltip)
            .interactable(false)
            .fixed_pos(top_left)
            .show(ctx, |ui| {
                ui.multiply_opacity(alpha);
                draggable_item(ui, item_state);
            });
        let measured = area.response.rect.size();
        with_state(ctx, id, |state| state.visual_size = measured);
    }
}
