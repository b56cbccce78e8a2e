//! Pointer interaction state machine
//!
//! Drag and resize hold transient state here, separate from the card store.
//! Every pointer move commits to the store immediately, so ending or losing
//! an interaction never has anything to roll back.

mod drag;
mod result;
mod router;
mod target;

pub use drag::DragState;
pub use result::InputResult;
pub use router::InputRouter;
pub use target::{ElementKind, PointerTarget};

use crate::card::{ResizeHandle, SizeBounds};
use crate::math::{Size, Vec2};
use crate::viewport::Viewport;

/// Calculate new position and size for a resize by `delta` from the start
/// geometry.
///
/// Sizes are clamped to `bounds`; the edge opposite the dragged handle stays
/// anchored even when clamping kicks in, and the moving west/north edge never
/// crosses into the reserved band or off the left of the viewport.
pub fn calculate_resize(
    handle: ResizeHandle,
    start_pos: Vec2,
    start_size: Size,
    delta: Vec2,
    bounds: &SizeBounds,
    viewport: &Viewport,
) -> (Vec2, Size) {
    let usable = viewport.usable_rect();
    let mut new_pos = start_pos;
    let mut new_size = start_size;

    if handle.moves_east() {
        let room = usable.right() - start_pos.x;
        new_size.width = fit_axis(start_size.width + delta.x, bounds.min.width, bounds.max.width, room);
    }
    if handle.moves_west() {
        let right = start_pos.x + start_size.width;
        let room = right - usable.x;
        new_size.width = fit_axis(start_size.width - delta.x, bounds.min.width, bounds.max.width, room);
        new_pos.x = right - new_size.width;
    }
    if handle.moves_south() {
        let room = usable.bottom() - start_pos.y;
        new_size.height = fit_axis(start_size.height + delta.y, bounds.min.height, bounds.max.height, room);
    }
    if handle.moves_north() {
        let bottom = start_pos.y + start_size.height;
        let room = bottom - usable.y;
        new_size.height = fit_axis(start_size.height - delta.y, bounds.min.height, bounds.max.height, room);
        new_pos.y = bottom - new_size.height;
    }

    (new_pos, new_size)
}

/// Clamp a candidate length to `[min, min(max, room)]`; `min` always wins
fn fit_axis(candidate: f32, min: f32, max: f32, room: f32) -> f32 {
    candidate.min(max.min(room)).max(min)
}
