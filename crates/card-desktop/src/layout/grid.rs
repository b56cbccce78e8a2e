//! Grid geometry shared by tiling and group stacking

use crate::card::SizeBounds;
use crate::math::{Rect, Size, Vec2};

/// Row-major grid of equal cells covering the usable viewport
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridSpec {
    pub cols: usize,
    pub rows: usize,
    /// Size of one cell
    pub cell: Size,
    /// Top-left corner of cell 0
    pub origin: Vec2,
}

impl GridSpec {
    /// Grid for `count` items.
    ///
    /// Columns follow the usable area's aspect ratio,
    /// `cols = ceil(sqrt(count * aspect))` limited to `1..=count`, and
    /// `rows = ceil(count / cols)`. Cell sizes are floored and then clamped to
    /// `bounds`. A degenerate usable area falls back to `fallback` cells.
    pub fn for_count(count: usize, usable: Rect, bounds: Option<SizeBounds>, fallback: Size) -> Self {
        let count = count.max(1);
        let area = usable.size();
        let aspect = area.aspect_ratio();

        let cols = ((count as f32 * aspect).sqrt().ceil() as usize).clamp(1, count);
        let rows = count.div_ceil(cols);

        let cell = if area.is_empty() {
            fallback
        } else {
            Size::new(
                (area.width / cols as f32).floor(),
                (area.height / rows as f32).floor(),
            )
        };
        let cell = match bounds {
            Some(bounds) => bounds.clamp(cell),
            None => cell,
        };

        Self {
            cols,
            rows,
            cell,
            origin: usable.position(),
        }
    }

    /// Number of cells in the grid
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cols * self.rows
    }

    /// `(col, row)` of the `index`-th cell
    #[inline]
    pub fn cell_coords(&self, index: usize) -> (usize, usize) {
        (index % self.cols, index / self.cols)
    }

    /// Top-left corner of the `index`-th cell
    pub fn cell_origin(&self, index: usize) -> Vec2 {
        let (col, row) = self.cell_coords(index);
        Vec2::new(
            self.origin.x + col as f32 * self.cell.width,
            self.origin.y + row as f32 * self.cell.height,
        )
    }

    /// Bounds of the `index`-th cell
    #[inline]
    pub fn cell_rect(&self, index: usize) -> Rect {
        Rect::from_pos_size(self.cell_origin(index), self.cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usable() -> Rect {
        Rect::new(0.0, 64.0, 1200.0, 688.0)
    }

    #[test]
    fn test_single_item_fills_area() {
        let grid = GridSpec::for_count(1, usable(), None, Size::new(480.0, 360.0));
        assert_eq!((grid.cols, grid.rows), (1, 1));
        assert_eq!(grid.cell, Size::new(1200.0, 688.0));
        assert_eq!(grid.cell_origin(0), Vec2::new(0.0, 64.0));
    }

    #[test]
    fn test_four_items_on_wide_area() {
        // sqrt(4 * 1200/688) = 2.64 -> 3 columns, 2 rows
        let grid = GridSpec::for_count(4, usable(), None, Size::new(480.0, 360.0));
        assert_eq!((grid.cols, grid.rows), (3, 2));
        assert_eq!(grid.cell, Size::new(400.0, 344.0));
        assert_eq!(grid.cell_origin(3), Vec2::new(0.0, 64.0 + 344.0));
        assert!(grid.capacity() >= 4);
        assert!(!grid.cell_rect(0).intersects(&grid.cell_rect(1)));
        assert!(!grid.cell_rect(1).intersects(&grid.cell_rect(4)));
    }

    #[test]
    fn test_columns_never_exceed_count() {
        let wide = Rect::new(0.0, 0.0, 10_000.0, 100.0);
        let grid = GridSpec::for_count(2, wide, None, Size::new(480.0, 360.0));
        assert_eq!(grid.cols, 2);
        assert_eq!(grid.rows, 1);
    }

    #[test]
    fn test_cell_is_clamped_to_bounds() {
        let bounds = SizeBounds {
            min: Size::new(500.0, 100.0),
            max: Size::new(800.0, 300.0),
        };
        let grid = GridSpec::for_count(4, usable(), Some(bounds), Size::new(480.0, 360.0));
        assert_eq!(grid.cell, Size::new(500.0, 300.0));
    }

    #[test]
    fn test_degenerate_area_uses_fallback() {
        let grid = GridSpec::for_count(3, Rect::new(0.0, 64.0, 0.0, 0.0), None, Size::new(480.0, 360.0));
        assert_eq!(grid.cell, Size::new(480.0, 360.0));
        assert_eq!((grid.cols, grid.rows), (2, 2));
    }
}
