//! Pure dropdown placement

use serde::Serialize;

use crate::config::DropdownConfig;
use crate::math::{clamp_lo, Rect, Size, Vec2};

/// Which side of the trigger the menu opens on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalPlacement {
    Below,
    Above,
}

/// Which trigger edge the menu lines up with
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum HorizontalAlign {
    /// Left edges aligned, menu extends right
    StartAligned,
    /// Right edges aligned, menu extends left
    EndAligned,
}

/// Computed menu position
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DropdownPlacement {
    pub position: Vec2,
    pub vertical: VerticalPlacement,
    pub horizontal: HorizontalAlign,
}

impl DropdownPlacement {
    /// Menu bounds for a menu of `size`
    #[inline]
    pub fn rect(&self, size: Size) -> Rect {
        Rect::from_pos_size(self.position, size)
    }
}

/// Place a menu of `size` next to `trigger`.
///
/// Opens below unless the menu does not fit there and there is more room
/// above. Aligns to the trigger's left edge unless the menu would run past
/// the right side of the viewport. The result is clamped so the menu stays
/// `margin` pixels inside the viewport where it fits.
pub fn position_dropdown(
    trigger: Rect,
    size: Size,
    viewport: Rect,
    config: &DropdownConfig,
) -> DropdownPlacement {
    let gap = config.gap;
    let margin = config.margin;

    let room_below = viewport.bottom() - margin - (trigger.bottom() + gap);
    let room_above = (trigger.y - gap) - (viewport.y + margin);
    let vertical = if size.height <= room_below || room_below >= room_above {
        VerticalPlacement::Below
    } else {
        VerticalPlacement::Above
    };

    let room_right = viewport.right() - margin - trigger.x;
    let horizontal = if size.width <= room_right {
        HorizontalAlign::StartAligned
    } else {
        HorizontalAlign::EndAligned
    };

    let y = match vertical {
        VerticalPlacement::Below => trigger.bottom() + gap,
        VerticalPlacement::Above => trigger.y - gap - size.height,
    };
    let x = match horizontal {
        HorizontalAlign::StartAligned => trigger.x,
        HorizontalAlign::EndAligned => trigger.right() - size.width,
    };

    let position = Vec2::new(
        clamp_lo(x, viewport.x + margin, viewport.right() - margin - size.width),
        clamp_lo(y, viewport.y + margin, viewport.bottom() - margin - size.height),
    );

    DropdownPlacement {
        position,
        vertical,
        horizontal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Rect {
        Rect::new(0.0, 0.0, 1200.0, 800.0)
    }

    fn menu() -> Size {
        Size::new(200.0, 240.0)
    }

    #[test]
    fn test_opens_below_by_default() {
        let trigger = Rect::new(100.0, 100.0, 80.0, 24.0);
        let placement = position_dropdown(trigger, menu(), viewport(), &DropdownConfig::default());
        assert_eq!(placement.vertical, VerticalPlacement::Below);
        assert_eq!(placement.horizontal, HorizontalAlign::StartAligned);
        assert_eq!(placement.position, Vec2::new(100.0, 128.0));
    }

    #[test]
    fn test_flips_above_near_bottom_edge() {
        let trigger = Rect::new(100.0, 700.0, 80.0, 24.0);
        let placement = position_dropdown(trigger, menu(), viewport(), &DropdownConfig::default());
        assert_eq!(placement.vertical, VerticalPlacement::Above);
        assert_eq!(placement.position.y, 700.0 - 4.0 - 240.0);
    }

    #[test]
    fn test_end_aligns_near_right_edge() {
        let trigger = Rect::new(1100.0, 100.0, 80.0, 24.0);
        let placement = position_dropdown(trigger, menu(), viewport(), &DropdownConfig::default());
        assert_eq!(placement.horizontal, HorizontalAlign::EndAligned);
        assert_eq!(placement.position.x, 1180.0 - 200.0);
    }

    #[test]
    fn test_stays_below_when_neither_side_fits_but_below_is_larger() {
        let tall = Size::new(200.0, 700.0);
        let trigger = Rect::new(100.0, 100.0, 80.0, 24.0);
        let placement = position_dropdown(trigger, tall, viewport(), &DropdownConfig::default());
        assert_eq!(placement.vertical, VerticalPlacement::Below);
        // Clamped so the bottom keeps the margin
        assert_eq!(placement.position.y, 800.0 - 8.0 - 700.0);
    }

    #[test]
    fn test_clamped_inside_viewport() {
        let trigger = Rect::new(-50.0, 100.0, 80.0, 24.0);
        let placement = position_dropdown(trigger, menu(), viewport(), &DropdownConfig::default());
        assert_eq!(placement.position.x, 8.0);
    }
}
