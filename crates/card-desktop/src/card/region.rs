//! Card regions for hit testing and resize handles

use serde::{Deserialize, Serialize};

/// One of the eight resize affordances
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeHandle {
    N,
    S,
    E,
    W,
    NE,
    NW,
    SE,
    SW,
}

impl ResizeHandle {
    /// All handles, edges first
    pub const ALL: [ResizeHandle; 8] = [
        ResizeHandle::N,
        ResizeHandle::S,
        ResizeHandle::E,
        ResizeHandle::W,
        ResizeHandle::NE,
        ResizeHandle::NW,
        ResizeHandle::SE,
        ResizeHandle::SW,
    ];

    /// Parse the direction strings used by the renderer (`"n"`, `"se"`, ...)
    pub fn parse(direction: &str) -> Option<Self> {
        match direction {
            "n" => Some(ResizeHandle::N),
            "s" => Some(ResizeHandle::S),
            "e" => Some(ResizeHandle::E),
            "w" => Some(ResizeHandle::W),
            "ne" => Some(ResizeHandle::NE),
            "nw" => Some(ResizeHandle::NW),
            "se" => Some(ResizeHandle::SE),
            "sw" => Some(ResizeHandle::SW),
            _ => None,
        }
    }

    /// Handle moves the left edge
    #[inline]
    pub fn moves_west(self) -> bool {
        matches!(self, ResizeHandle::W | ResizeHandle::NW | ResizeHandle::SW)
    }

    /// Handle moves the right edge
    #[inline]
    pub fn moves_east(self) -> bool {
        matches!(self, ResizeHandle::E | ResizeHandle::NE | ResizeHandle::SE)
    }

    /// Handle moves the top edge
    #[inline]
    pub fn moves_north(self) -> bool {
        matches!(self, ResizeHandle::N | ResizeHandle::NE | ResizeHandle::NW)
    }

    /// Handle moves the bottom edge
    #[inline]
    pub fn moves_south(self) -> bool {
        matches!(self, ResizeHandle::S | ResizeHandle::SE | ResizeHandle::SW)
    }

    /// CSS cursor for this handle
    pub fn cursor(self) -> &'static str {
        match self {
            ResizeHandle::N | ResizeHandle::S => "ns-resize",
            ResizeHandle::E | ResizeHandle::W => "ew-resize",
            ResizeHandle::NE | ResizeHandle::SW => "nesw-resize",
            ResizeHandle::NW | ResizeHandle::SE => "nwse-resize",
        }
    }
}

/// Region of a card under the pointer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "handle", rename_all = "camelCase")]
pub enum CardRegion {
    /// Header area (drag to move, double-click to maximize)
    TitleBar,
    /// Card body
    Content,
    CloseButton,
    MinimizeButton,
    MaximizeButton,
    /// Edge or corner resize affordance
    Resize(ResizeHandle),
}

impl CardRegion {
    /// Check if this is a header button
    #[inline]
    pub fn is_button(&self) -> bool {
        matches!(
            self,
            CardRegion::CloseButton | CardRegion::MinimizeButton | CardRegion::MaximizeButton
        )
    }

    /// Resize handle, if this is a resize region
    #[inline]
    pub fn resize_handle(&self) -> Option<ResizeHandle> {
        match self {
            CardRegion::Resize(handle) => Some(*handle),
            _ => None,
        }
    }

    /// CSS cursor for this region
    pub fn cursor(&self) -> &'static str {
        match self {
            CardRegion::TitleBar => "move",
            CardRegion::Content => "default",
            CardRegion::CloseButton | CardRegion::MinimizeButton | CardRegion::MaximizeButton => {
                "pointer"
            }
            CardRegion::Resize(handle) => handle.cursor(),
        }
    }
}
