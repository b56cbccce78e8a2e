//! Viewport bounds and geometry clamping
//!
//! The card surface spans the whole browser viewport, but a band at the top
//! and one at the bottom are reserved for global chrome. Cards are kept inside
//! the remaining usable region.

use serde::{Deserialize, Serialize};

use crate::config::ViewportConfig;
use crate::math::{clamp_lo, Rect, Size, Vec2};

/// Viewport dimensions plus reserved chrome bands
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Full viewport size in pixels
    pub size: Size,
    /// Height reserved at the top
    pub top_reserve: f32,
    /// Height reserved at the bottom
    pub bottom_reserve: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::with_config(1920.0, 1080.0, &ViewportConfig::default())
    }
}

impl Viewport {
    /// Create a viewport without reserved bands
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Size::new(width, height),
            top_reserve: 0.0,
            bottom_reserve: 0.0,
        }
    }

    /// Create a viewport using the configured reserved bands
    pub fn with_config(width: f32, height: f32, config: &ViewportConfig) -> Self {
        Self {
            size: Size::new(width, height),
            top_reserve: config.top_reserve,
            bottom_reserve: config.bottom_reserve,
        }
    }

    /// Full viewport rectangle, including reserved bands
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_pos_size(Vec2::ZERO, self.size)
    }

    /// Region cards may occupy
    pub fn usable_rect(&self) -> Rect {
        let height = (self.size.height - self.top_reserve - self.bottom_reserve).max(0.0);
        Rect::new(0.0, self.top_reserve, self.size.width.max(0.0), height)
    }

    /// Clamp a card origin so a card of `dimensions` stays inside the usable
    /// region. Cards bigger than the region are pinned to its top-left corner.
    pub fn clamp_position(&self, position: Vec2, dimensions: Size) -> Vec2 {
        let usable = self.usable_rect();
        Vec2::new(
            clamp_lo(position.x, usable.x, usable.right() - dimensions.width),
            clamp_lo(position.y, usable.y, usable.bottom() - dimensions.height),
        )
    }

    /// Check that a card rectangle overlaps the usable region
    pub fn intersects_usable(&self, rect: &Rect) -> bool {
        let usable = self.usable_rect();
        if usable.size().is_empty() {
            // Nothing to intersect; only the pinned origin is reachable
            return rect.x <= usable.x && rect.y <= usable.y;
        }
        usable.intersects(rect)
    }
}
