//! Long-press-then-drag recognition.
//!
//! The detector is fed one pointer sample per pass and never touches egui
//! directly, so the timing rules can be exercised without a context.

use egui::{Pos2, Vec2};

/// Pointer state sampled once per pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    /// Input time in seconds.
    pub time: f64,
    /// Latest pointer position; `None` once the pointer left the surface.
    pub pos: Option<Pos2>,
    pub primary_down: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    /// Long press recognised; `pos` is the pointer position at that moment.
    Started { pos: Pos2 },
    Moved { delta: Vec2 },
    Ended,
    Cancelled,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
enum Phase {
    #[default]
    Idle,
    Pressed {
        origin: Pos2,
        started_at: f64,
    },
    /// Moved past the slop before the long press fired; waits for release.
    Rejected,
    Dragging {
        last: Pos2,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LongPressDetector {
    timeout: f64,
    slop: f32,
    phase: Phase,
}

impl Default for LongPressDetector {
    fn default() -> Self {
        Self::new(0.4, 8.0)
    }
}

impl LongPressDetector {
    pub fn new(timeout_secs: f64, slop: f32) -> Self {
        Self {
            timeout: timeout_secs.max(0.0),
            slop: slop.max(0.0),
            phase: Phase::Idle,
        }
    }

    pub fn set_thresholds(&mut self, timeout_secs: f64, slop: f32) {
        self.timeout = timeout_secs.max(0.0);
        self.slop = slop.max(0.0);
    }

    /// Begin tracking a press. Ignored unless idle.
    pub fn press(&mut self, origin: Pos2, time: f64) -> bool {
        if self.phase != Phase::Idle {
            return false;
        }
        self.phase = Phase::Pressed {
            origin,
            started_at: time,
        };
        true
    }

    pub fn is_idle(&self) -> bool {
        self.phase == Phase::Idle
    }

    pub fn is_pressed(&self) -> bool {
        matches!(self.phase, Phase::Pressed { .. })
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging { .. })
    }

    /// Seconds left before a pending press turns into a drag.
    pub fn remaining(&self, now: f64) -> Option<f64> {
        match self.phase {
            Phase::Pressed { started_at, .. } => Some((started_at + self.timeout - now).max(0.0)),
            _ => None,
        }
    }

    pub fn update(&mut self, sample: PointerSample) -> Option<GestureEvent> {
        match self.phase {
            Phase::Idle => None,
            Phase::Rejected => {
                if !sample.primary_down {
                    self.phase = Phase::Idle;
                }
                None
            }
            Phase::Pressed { origin, started_at } => {
                if !sample.primary_down {
                    self.phase = Phase::Idle;
                    return None;
                }
                let pos = sample.pos.unwrap_or(origin);
                if (pos - origin).length() > self.slop {
                    self.phase = Phase::Rejected;
                    return None;
                }
                if sample.time - started_at >= self.timeout {
                    self.phase = Phase::Dragging { last: pos };
                    return Some(GestureEvent::Started { pos });
                }
                None
            }
            Phase::Dragging { last } => {
                if !sample.primary_down {
                    self.phase = Phase::Idle;
                    return Some(GestureEvent::Ended);
                }
                let Some(pos) = sample.pos else {
                    self.phase = Phase::Idle;
                    return Some(GestureEvent::Cancelled);
                };
                let delta = pos - last;
                if delta == Vec2::ZERO {
                    return None;
                }
                self.phase = Phase::Dragging { last: pos };
                Some(GestureEvent::Moved { delta })
            }
        }
    }

    /// Abort whatever is in flight. Reports `Cancelled` only for an active drag.
    pub fn interrupt(&mut self) -> Option<GestureEvent> {
        let was_dragging = self.is_dragging();
        self.phase = match self.phase {
            Phase::Pressed { .. } | Phase::Dragging { .. } => Phase::Rejected,
            other => other,
        };
        was_dragging.then_some(GestureEvent::Cancelled)
    }
}
