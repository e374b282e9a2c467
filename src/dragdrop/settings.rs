use serde::{Deserialize, Serialize};

/// Tunables for gesture recognition, auto-scroll and the floating visual.
///
/// Config keys: `long_press_ms`, `touch_slop`, `edge_margin`,
/// `auto_scroll_step`, `auto_scroll_interval_ms`, `auto_scroll_acceleration`,
/// `auto_scroll_max_speed`, `overlay_alpha`, `overlay_lift`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragDropConfig {
    /// Press duration before a drag starts.
    #[serde(default = "default_long_press_ms")]
    pub long_press_ms: u64,
    /// Movement allowed during the long press, in points.
    #[serde(default = "default_touch_slop")]
    pub touch_slop: f32,
    /// Distance from the region top/bottom that triggers auto-scroll.
    #[serde(default = "default_edge_margin")]
    pub edge_margin: f32,
    /// Points scrolled per step at speed 1.
    #[serde(default = "default_auto_scroll_step")]
    pub auto_scroll_step: f32,
    /// Time between auto-scroll steps.
    #[serde(default = "default_auto_scroll_interval_ms")]
    pub auto_scroll_interval_ms: u64,
    /// Speed multiplier added after every step.
    #[serde(default = "default_auto_scroll_acceleration")]
    pub auto_scroll_acceleration: f32,
    /// Upper bound on the speed multiplier; unbounded when absent.
    #[serde(default)]
    pub auto_scroll_max_speed: Option<f32>,
    #[serde(default = "default_overlay_alpha")]
    pub overlay_alpha: f32,
    /// Gap kept between the pointer and the bottom of the floating visual.
    #[serde(default = "default_overlay_lift")]
    pub overlay_lift: f32,
}

impl Default for DragDropConfig {
    fn default() -> Self {
        Self {
            long_press_ms: default_long_press_ms(),
            touch_slop: default_touch_slop(),
            edge_margin: default_edge_margin(),
            auto_scroll_step: default_auto_scroll_step(),
            auto_scroll_interval_ms: default_auto_scroll_interval_ms(),
            auto_scroll_acceleration: default_auto_scroll_acceleration(),
            auto_scroll_max_speed: None,
            overlay_alpha: default_overlay_alpha(),
            overlay_lift: default_overlay_lift(),
        }
    }
}

impl DragDropConfig {
    /// Clamp values loaded from disk into usable ranges.
    pub fn normalized(mut self) -> Self {
        self.touch_slop = self.touch_slop.max(0.0);
        self.edge_margin = self.edge_margin.max(0.0);
        self.auto_scroll_step = self.auto_scroll_step.max(0.0);
        self.auto_scroll_interval_ms = self.auto_scroll_interval_ms.max(1);
        self.auto_scroll_acceleration = self.auto_scroll_acceleration.max(0.0);
        self.auto_scroll_max_speed = self.auto_scroll_max_speed.map(|speed| speed.max(1.0));
        self.overlay_alpha = self.overlay_alpha.clamp(0.0, 1.0);
        self.overlay_lift = self.overlay_lift.max(0.0);
        self
    }

    pub fn long_press_secs(&self) -> f64 {
        self.long_press_ms as f64 / 1000.0
    }

    pub fn auto_scroll_interval_secs(&self) -> f64 {
        self.auto_scroll_interval_ms.max(1) as f64 / 1000.0
    }
}

fn default_long_press_ms() -> u64 {
    400
}

fn default_touch_slop() -> f32 {
    8.0
}

fn default_edge_margin() -> f32 {
    200.0
}

fn default_auto_scroll_step() -> f32 {
    2.0
}

fn default_auto_scroll_interval_ms() -> u64 {
    5
}

fn default_auto_scroll_acceleration() -> f32 {
    0.5
}

fn default_overlay_alpha() -> f32 {
    0.9
}

fn default_overlay_lift() -> f32 {
    20.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_clamps_out_of_range_values() {
        let config = DragDropConfig {
            edge_margin: -5.0,
            auto_scroll_interval_ms: 0,
            auto_scroll_max_speed: Some(0.2),
            overlay_alpha: 3.0,
            ..DragDropConfig::default()
        }
        .normalized();
        assert_eq!(config.edge_margin, 0.0);
        assert_eq!(config.auto_scroll_interval_ms, 1);
        assert_eq!(config.auto_scroll_max_speed, Some(1.0));
        assert_eq!(config.overlay_alpha, 1.0);
    }
}
