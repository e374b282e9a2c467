//! Headless egui driver.

use egui::{Context, Event, Key, Modifiers, PointerButton, Pos2, RawInput, Rect, Vec2};

pub const SCREEN: Vec2 = Vec2::new(400.0, 800.0);

/// Feeds synthetic input to a [`Context`] one pass at a time.
pub struct Harness {
    pub ctx: Context,
    time: f64,
    events: Vec<Event>,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            ctx: Context::default(),
            time: 0.0,
            events: Vec::new(),
        }
    }

    pub fn advance(&mut self, secs: f64) {
        self.time += secs;
    }

    pub fn press(&mut self, pos: Pos2) {
        self.events.push(Event::PointerMoved(pos));
        self.events.push(button(pos, true));
    }

    pub fn move_to(&mut self, pos: Pos2) {
        self.events.push(Event::PointerMoved(pos));
    }

    pub fn release(&mut self, pos: Pos2) {
        self.events.push(Event::PointerMoved(pos));
        self.events.push(button(pos, false));
    }

    /// Pointer left the surface, as touch backends report after a lift.
    pub fn pointer_gone(&mut self) {
        self.events.push(Event::PointerGone);
    }

    pub fn key(&mut self, key: Key) {
        self.events.push(Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: Modifiers::default(),
        });
    }

    /// Run one frame with every queued event.
    pub fn frame(&mut self, run_ui: impl FnMut(&Context)) {
        let input = RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, SCREEN)),
            time: Some(self.time),
            events: std::mem::take(&mut self.events),
            ..Default::default()
        };
        let _ = self.ctx.run(input, run_ui);
    }
}

fn button(pos: Pos2, pressed: bool) -> Event {
    Event::PointerButton {
        pos,
        button: PointerButton::Primary,
        pressed,
        modifiers: Modifiers::default(),
    }
}
