use super::context::{current_region, with_state};
use egui::{Color32, Id, InnerResponse, Shape, Ui};
use std::any::Any;
use std::hash::Hash;
use tracing::{debug, trace};

/// Element that can receive a dragged payload.
///
/// Each pass it measures its own rect and checks it against the live drag
/// position. A hovered, enabled target that is not the drag's own source is
/// painted with the highlight colour. On release its content receives the
/// payload once; a payload of another type is never handed over.
///
/// ```ignore
/// DropTarget::new(item.name.clone())
///     .enabled(item.enabled)
///     .highlight(accent)
///     .show(ui, |ui, dropped| {
///         if let Some(source) = dropped {
///             on_drop(source, item.name.clone());
///         }
///         ui.label(&item.name);
///     });
/// ```
#[must_use = "call `show` to render the drop target"]
pub struct DropTarget<T> {
    value: T,
    enabled: bool,
    highlight: Color32,
    id_salt: Option<Id>,
}

/// Hover state reported by [`DropTarget::show`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DropTargetHover {
    /// The drag position is inside the target and the payload is not its own.
    pub hovered: bool,
    /// Hovered and enabled; the target is highlighted.
    pub highlighted: bool,
}

impl<T> DropTarget<T>
where
    T: Any + Clone + PartialEq + Send + Sync,
{
    pub fn new(value: T) -> Self {
        Self {
            value,
            enabled: true,
            highlight: Color32::TRANSPARENT,
            id_salt: None,
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Background painted while an acceptable payload hovers the target.
    pub fn highlight(mut self, color: Color32) -> Self {
        self.highlight = color;
        self
    }

    /// Stable identity across passes; defaults to the next auto id of the parent.
    pub fn id_salt(mut self, salt: impl Hash) -> Self {
        self.id_salt = Some(Id::new(salt));
        self
    }

    pub fn show<R>(
        self,
        ui: &mut Ui,
        add_contents: impl FnOnce(&mut Ui, Option<T>) -> R,
    ) -> InnerResponse<(R, DropTargetHover)> {
        let id = match self.id_salt {
            Some(salt) => ui.make_persistent_id(salt),
            None => ui.next_auto_id(),
        };
        let ctx = ui.ctx().clone();
        let Some(region) = current_region(&ctx) else {
            trace!("Drop target rendered outside a drag region");
            let InnerResponse { inner, response } = ui.scope(|ui| add_contents(ui, None));
            return InnerResponse::new((inner, DropTargetHover::default()), response);
        };

        let dropped = with_state(&ctx, region, |state| state.take_drop(id))
            .and_then(|payload| {
                let value = payload.downcast::<T>();
                if value.is_none() {
                    debug!(
                        "Drop target {:?} ignored payload of type {}",
                        id,
                        payload.type_name()
                    );
                }
                value
            });

        let background = ui.painter().add(Shape::Noop);
        let InnerResponse { inner, response } = ui.scope(|ui| add_contents(ui, dropped));

        let pass = ctx.cumulative_pass_nr();
        let hover = with_state(&ctx, region, |state| {
            let inside = state.is_dragging() && response.rect.contains(state.drag_position());
            let hovered = inside && !state.is_source(&self.value);
            if hovered {
                state.on_hovered_target(id, self.enabled, pass);
            } else {
                state.on_unhovered_target(id);
            }
            DropTargetHover {
                hovered,
                highlighted: hovered && self.enabled,
            }
        });

        if hover.highlighted {
            ui.painter().set(
                background,
                Shape::rect_filled(response.rect, 0.0, self.highlight),
            );
        }
        InnerResponse::new((inner, hover), response)
    }
}
