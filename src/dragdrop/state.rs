use super::auto_scroll::AutoScroller;
use super::gesture::{GestureEvent, LongPressDetector};
use super::item_state::{DraggableItemState, ScrollDirection};
use super::payload::Payload;
use egui::{Id, Pos2, Vec2};
use std::collections::HashMap;
use tracing::{debug, info};

/// Hover report from one drop target.
#[derive(Clone, Copy, Debug, PartialEq)]
struct HoverEntry {
    state: DraggableItemState,
    /// Pass that last refreshed the entry.
    pass: u64,
    /// Report order; later reports paint on top.
    order: u64,
}

/// Source waiting for its long press to complete.
#[derive(Clone, Debug)]
pub struct DragCandidate {
    pub source: Id,
    pub payload: Payload,
}

/// Payload addressed to the target it was released over.
#[derive(Clone, Debug)]
pub struct PendingDrop {
    pub target: Id,
    pub payload: Payload,
    pub pass: u64,
}

/// Result of ending a drag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DropOutcome {
    Delivered(Id),
    NoTarget,
    Disabled,
    Cancelled,
}

/// State of one drag region: the active drag, hovered targets and auto-scroll.
///
/// At most one drag is active at a time. End and cancel both reset the
/// position to the origin; only end resolves a drop.
#[derive(Clone, Debug, Default)]
pub struct DraggableState {
    dragging: bool,
    drag_position: Pos2,
    payload: Option<Payload>,
    source: Option<Id>,
    hovered: HashMap<Id, HoverEntry>,
    hover_counter: u64,
    scroll_direction: ScrollDirection,
    pending_drop: Option<PendingDrop>,
    pub(crate) detector: LongPressDetector,
    pub(crate) candidate: Option<DragCandidate>,
    pub(crate) auto_scroller: AutoScroller,
    pub(crate) visual_size: Vec2,
}

impl DraggableState {
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn drag_position(&self) -> Pos2 {
        self.drag_position
    }

    pub fn payload(&self) -> Option<&Payload> {
        self.payload.as_ref()
    }

    /// Id of the source widget the active drag started from.
    pub fn source(&self) -> Option<Id> {
        self.source
    }

    pub fn scroll_direction(&self) -> ScrollDirection {
        self.scroll_direction
    }

    pub(crate) fn set_scroll_direction(&mut self, direction: ScrollDirection) {
        self.scroll_direction = direction;
    }

    pub fn pending_drop(&self) -> Option<&PendingDrop> {
        self.pending_drop.as_ref()
    }

    /// True when the active payload equals `value`.
    pub fn is_source<T>(&self, value: &T) -> bool
    where
        T: PartialEq + 'static,
    {
        self.payload
            .as_ref()
            .is_some_and(|payload| payload.matches(value))
    }

    pub fn on_drag_start(&mut self, position: Pos2, offset: Vec2, payload: Payload) {
        self.dragging = true;
        self.drag_position = position + offset;
        self.payload = Some(payload);
        self.hovered.clear();
        self.pending_drop = None;
        self.visual_size = Vec2::ZERO;
    }

    pub fn on_drag(&mut self, delta: Vec2) {
        if self.dragging {
            self.drag_position += delta;
        }
    }

    /// Release: deliver to the topmost enabled hovered target, if any.
    pub fn on_drag_end(&mut self, pass: u64) -> DropOutcome {
        if !self.dragging {
            return DropOutcome::Cancelled;
        }
        let target = self
            .hovered
            .iter()
            .filter(|(_, entry)| entry.state == DraggableItemState::Enabled)
            .max_by_key(|(_, entry)| entry.order)
            .map(|(id, _)| *id);
        let any_disabled = self
            .hovered
            .values()
            .any(|entry| entry.state == DraggableItemState::Disabled);
        let payload = self.payload.take();
        self.reset();
        match (target, payload) {
            (Some(target), Some(payload)) => {
                info!("Drop delivered to {:?} payload={:?}", target, payload);
                self.pending_drop = Some(PendingDrop {
                    target,
                    payload,
                    pass,
                });
                DropOutcome::Delivered(target)
            }
            _ if any_disabled => {
                debug!("Drop released over a disabled target");
                DropOutcome::Disabled
            }
            _ => {
                debug!("Drop released outside any target");
                DropOutcome::NoTarget
            }
        }
    }

    pub fn on_drag_cancel(&mut self) -> DropOutcome {
        self.payload = None;
        self.reset();
        DropOutcome::Cancelled
    }

    fn reset(&mut self) {
        self.dragging = false;
        self.drag_position = Pos2::ZERO;
        self.source = None;
        self.hovered.clear();
        self.scroll_direction = ScrollDirection::None;
        self.auto_scroller.cancel();
    }

    pub fn on_hovered_target(&mut self, id: Id, enabled: bool, pass: u64) {
        self.hover_counter += 1;
        self.hovered.insert(
            id,
            HoverEntry {
                state: DraggableItemState::for_target(enabled),
                pass,
                order: self.hover_counter,
            },
        );
    }

    pub fn on_unhovered_target(&mut self, id: Id) {
        self.hovered.remove(&id);
    }

    /// Drop hover entries whose target did not report during `pass`.
    pub fn prune_hovered(&mut self, pass: u64) {
        self.hovered.retain(|_, entry| entry.pass == pass);
    }

    pub fn hovered_count(&self) -> usize {
        self.hovered.len()
    }

    /// Visual state for the floating item: the target's state when exactly
    /// one target is hovered, `Initiated` otherwise.
    pub fn draggable_item_state(&self) -> DraggableItemState {
        let mut entries = self.hovered.values();
        match (entries.next(), entries.next()) {
            (Some(entry), None) => entry.state,
            _ => DraggableItemState::Initiated,
        }
    }

    /// Hand the pending drop to `target`, once.
    pub fn take_drop(&mut self, target: Id) -> Option<Payload> {
        if self
            .pending_drop
            .as_ref()
            .is_some_and(|pending| pending.target == target)
        {
            return self.pending_drop.take().map(|pending| pending.payload);
        }
        None
    }

    /// Forget drops their target never picked up.
    pub fn expire_pending_drop(&mut self, pass: u64) {
        if let Some(pending) = &self.pending_drop
            && pending.pass < pass
        {
            debug!("Discarding undelivered drop for {:?}", pending.target);
            self.pending_drop = None;
        }
    }

    /// Offer a source for the next long press. Ignored while a gesture is in flight.
    pub fn arm(&mut self, source: Id, payload: Payload, origin: Pos2, time: f64) -> bool {
        if self.dragging || !self.detector.press(origin, time) {
            return false;
        }
        self.candidate = Some(DragCandidate { source, payload });
        true
    }

    /// Apply one gesture event to the state.
    pub fn apply_gesture(&mut self, event: GestureEvent, pass: u64) -> Option<DropOutcome> {
        match event {
            GestureEvent::Started { pos } => {
                let Some(candidate) = self.candidate.take() else {
                    return None;
                };
                info!("Drag gesture started from {:?}", candidate.source);
                self.on_drag_start(pos, Vec2::ZERO, candidate.payload);
                self.source = Some(candidate.source);
                None
            }
            GestureEvent::Moved { delta } => {
                self.on_drag(delta);
                None
            }
            GestureEvent::Ended => {
                info!("Drag gesture ended");
                self.candidate = None;
                Some(self.on_drag_end(pass))
            }
            GestureEvent::Cancelled => {
                info!("Drag gesture interrupted");
                self.candidate = None;
                Some(self.on_drag_cancel())
            }
        }
    }
}
