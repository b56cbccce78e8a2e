//! Z-index allocation
//!
//! The z-index space is split into bands so categories of cards always paint
//! in the same relative order, whatever their individual counters say:
//!
//! ```text
//! Minimized < Base < Focused < Expanded < Maximized < ControlBar < Dropdown
//! ```

mod allocator;

pub use allocator::{Allocation, BandShift, ZIndexAllocator};

use serde::{Deserialize, Serialize};

/// A reserved sub-range of the z-index space
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Band {
    /// Tray cards, indexed by stack position
    Minimized,
    /// Cards placed by a layout command
    Base,
    /// Cards raised by focus or creation
    Focused,
    /// Cards just restored from the tray
    Expanded,
    Maximized,
    /// Global control bar, above every card
    ControlBar,
    /// Floating menus, above everything
    Dropdown,
}

impl Band {
    pub const COUNT: usize = 7;

    pub const ALL: [Band; Band::COUNT] = [
        Band::Minimized,
        Band::Base,
        Band::Focused,
        Band::Expanded,
        Band::Maximized,
        Band::ControlBar,
        Band::Dropdown,
    ];

    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Band::Minimized => "minimized",
            Band::Base => "base",
            Band::Focused => "focused",
            Band::Expanded => "expanded",
            Band::Maximized => "maximized",
            Band::ControlBar => "control-bar",
            Band::Dropdown => "dropdown",
        }
    }
}
