//! State behind the sample screen.

/// One person in the sample list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    pub text: String,
    pub enabled: bool,
}

impl Item {
    pub fn new(text: impl Into<String>, enabled: bool) -> Self {
        Self {
            text: text.into(),
            enabled,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScreenState {
    pub items: Vec<Item>,
    pub drop_dialog_visible: bool,
    pub dialog_message: String,
}

/// Owns the screen state and the drop/dialog actions.
#[derive(Clone, Debug)]
pub struct DragDropSampleViewModel {
    state: ScreenState,
}

impl Default for DragDropSampleViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl DragDropSampleViewModel {
    pub fn new() -> Self {
        Self::with_items(vec![
            Item::new("Alice (enabled)", true),
            Item::new("Bob (enabled)", true),
            Item::new("Carol (enabled)", true),
            Item::new("David (enabled)", true),
            Item::new("Ellen (enabled)", true),
            Item::new("Mallory (disabled)", false),
            Item::new("Zoe (enabled)", true),
        ])
    }

    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            state: ScreenState {
                items,
                ..ScreenState::default()
            },
        }
    }

    pub fn state(&self) -> &ScreenState {
        &self.state
    }

    pub fn on_drop(&mut self, source_item: &str, target_item: &str) {
        tracing::info!("{source_item} dropped on {target_item}");
        self.state.dialog_message = format!("{source_item} sent data to {target_item}");
        self.state.drop_dialog_visible = true;
    }

    pub fn close_dialog(&mut self) {
        self.state.drop_dialog_visible = false;
    }
}
