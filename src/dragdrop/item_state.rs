/// Appearance of the floating drag visual.
///
/// `Initiated` while dragged over general content, `Enabled` over an enabled
/// drop target, `Disabled` over a disabled one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DraggableItemState {
    #[default]
    Initiated,
    Enabled,
    Disabled,
}

impl DraggableItemState {
    pub fn for_target(enabled: bool) -> Self {
        if enabled {
            DraggableItemState::Enabled
        } else {
            DraggableItemState::Disabled
        }
    }
}

/// Direction the region should auto-scroll in, derived each pass from the
/// drag position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScrollDirection {
    Up,
    Down,
    #[default]
    None,
}

impl ScrollDirection {
    /// Sign applied to scroll steps: up moves the offset towards zero.
    pub fn sign(self) -> f32 {
        match self {
            ScrollDirection::Up => -1.0,
            ScrollDirection::Down => 1.0,
            ScrollDirection::None => 0.0,
        }
    }
}
