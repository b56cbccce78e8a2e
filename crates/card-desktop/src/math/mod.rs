//! Geometry primitives for card placement
//!
//! All coordinates are viewport pixels with the origin at the top-left
//! corner of the card surface.

mod vec2;
mod size;
mod rect;

pub use vec2::Vec2;
pub use size::Size;
pub use rect::Rect;

/// Clamp `value` into `[lo, hi]`, preferring `lo` when the range is inverted.
///
/// Cards larger than the usable region end up pinned to its top-left edge
/// instead of panicking like `f32::clamp` would.
#[inline]
pub fn clamp_lo(value: f32, lo: f32, hi: f32) -> f32 {
    value.min(hi).max(lo)
}
