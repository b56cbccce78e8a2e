//! Per-card size constraints

use serde::{Deserialize, Serialize};

use crate::math::Size;

/// Bounds on a card's dimensions as configured by the domain layer
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SizeConstraints {
    pub min: Size,
    pub max: Size,
    pub default: Size,
}

/// Effective bounds after misconfigured axes have been resolved
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizeBounds {
    pub min: Size,
    pub max: Size,
}

impl SizeConstraints {
    pub const fn new(min: Size, max: Size, default: Size) -> Self {
        Self { min, max, default }
    }

    /// True if either axis has `min > max`
    pub fn is_misconfigured(&self) -> bool {
        self.min.width > self.max.width || self.min.height > self.max.height
    }

    /// Effective `[min, max]` per axis.
    ///
    /// An axis with `min > max` collapses to the default size on that axis,
    /// so the card stays usable instead of the whole operation failing.
    pub fn resolve(&self) -> SizeBounds {
        let (min_w, max_w) = if self.min.width > self.max.width {
            (self.default.width, self.default.width)
        } else {
            (self.min.width, self.max.width)
        };
        let (min_h, max_h) = if self.min.height > self.max.height {
            (self.default.height, self.default.height)
        } else {
            (self.min.height, self.max.height)
        };
        SizeBounds {
            min: Size::new(min_w, min_h),
            max: Size::new(max_w, max_h),
        }
    }

    /// Clamp `size` into the effective bounds
    #[inline]
    pub fn clamp(&self, size: Size) -> Size {
        self.resolve().clamp(size)
    }
}

impl SizeBounds {
    /// Clamp `size` into `[min, max]`
    #[inline]
    pub fn clamp(&self, size: Size) -> Size {
        size.clamp(self.min, self.max)
    }

    /// Check that `size` lies within the bounds
    #[inline]
    pub fn contains(&self, size: Size) -> bool {
        size.fits_within(self.min, self.max)
    }

    /// Intersection of two bounds: the larger minimum and the smaller maximum
    pub fn tighten(&self, other: &SizeBounds) -> SizeBounds {
        SizeBounds {
            min: self.min.max(other.min),
            max: self.max.min(other.max),
        }
    }
}
