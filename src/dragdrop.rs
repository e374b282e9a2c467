//! Long-press drag and drop for egui.
//!
//! A [`LongPressDraggable`] region owns the drag state. Inside it, any widget
//! becomes a drag source through [`DragSourceExt::drag_on_long_press`] and any
//! block of UI becomes a [`DropTarget`]. While dragging, a floating visual
//! follows the pointer and the region auto-scrolls its [`ScrollableState`]
//! near the top and bottom edges.

pub mod auto_scroll;
pub mod context;
pub mod drag_source;
pub mod drop_target;
pub mod geometry;
pub mod gesture;
pub mod item_state;
pub mod payload;
pub mod region;
pub mod settings;
pub mod state;

pub use auto_scroll::{AutoScroller, ScrollAreaHandle, ScrollableState};
pub use drag_source::DragSourceExt;
pub use drop_target::{DropTarget, DropTargetHover};
pub use item_state::{DraggableItemState, ScrollDirection};
pub use payload::Payload;
pub use region::{DragRegionOutput, LongPressDraggable};
pub use settings::DragDropConfig;
pub use state::{DraggableState, DropOutcome};
