//! Implicit propagation of the enclosing drag region to its descendants.
//!
//! While a region renders its content it publishes its id in the context's
//! temp data; sources and targets look it up instead of taking the state as
//! a parameter. Nested regions restore the outer id when they finish.

use super::state::DraggableState;
use egui::{Context, Id};

fn current_region_key() -> Id {
    Id::new("dragdrop::current_region")
}

/// Id of the region whose content is currently being rendered.
pub fn current_region(ctx: &Context) -> Option<Id> {
    ctx.data(|data| data.get_temp::<Option<Id>>(current_region_key()))
        .flatten()
}

/// Run `add_contents` with `region` published as the current region.
pub(crate) fn with_region<R>(ctx: &Context, region: Id, add_contents: impl FnOnce() -> R) -> R {
    let previous = current_region(ctx);
    ctx.data_mut(|data| data.insert_temp(current_region_key(), Some(region)));
    let inner = add_contents();
    ctx.data_mut(|data| data.insert_temp(current_region_key(), previous));
    inner
}

/// Mutate the state of `region`, creating it on first use.
pub fn with_state<R>(ctx: &Context, region: Id, f: impl FnOnce(&mut DraggableState) -> R) -> R {
    ctx.data_mut(|data| f(data.get_temp_mut_or_default::<DraggableState>(region)))
}

/// Snapshot of the state of `region`, if it exists.
pub fn load_state(ctx: &Context, region: Id) -> Option<DraggableState> {
    ctx.data(|data| data.get_temp::<DraggableState>(region))
}
