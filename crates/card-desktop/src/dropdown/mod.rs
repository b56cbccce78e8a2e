//! Dropdown positioner
//!
//! Floating menus opened from card headers and toolbars. Placement is a pure
//! function of the trigger rectangle, the menu size and the viewport;
//! measuring those on a live rendering surface is left to a
//! [`ViewportGeometry`] implementation supplied by the host.

mod controller;
mod position;

pub use controller::{DropdownController, OpenDropdown};
pub use position::{position_dropdown, DropdownPlacement, HorizontalAlign, VerticalPlacement};

use serde::{Deserialize, Serialize};

use crate::math::Rect;

/// Host-assigned identifier of a trigger element
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnchorId(pub u64);

/// Source of live layout measurements
pub trait ViewportGeometry {
    /// Visible viewport in page pixels
    fn viewport(&self) -> Rect;

    /// Bounding box of a trigger, or `None` if it is no longer mounted
    fn anchor_rect(&self, anchor: AnchorId) -> Option<Rect>;
}

/// Measurements taken by the host for a single anchor
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeasuredGeometry {
    pub viewport: Rect,
    pub anchor: AnchorId,
    /// `None` once the anchor has been unmounted
    pub anchor_rect: Option<Rect>,
}

impl ViewportGeometry for MeasuredGeometry {
    fn viewport(&self) -> Rect {
        self.viewport
    }

    fn anchor_rect(&self, anchor: AnchorId) -> Option<Rect> {
        if anchor == self.anchor {
            self.anchor_rect
        } else {
            None
        }
    }
}
