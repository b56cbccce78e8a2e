//! Grid tiling ("arrange all")

use crate::card::Card;
use crate::config::LayoutConfig;
use crate::viewport::Viewport;
use super::{shared_bounds, GridSpec, LayoutPlan, Placement};

/// Give each card its own cell, row-major in the given order.
///
/// Cell sizes honor the tightest constraints across all cards, and each card
/// is then clamped to its own constraints inside its cell, so no two cards
/// overlap. Z-indices run upward from `z_start` in tiling order.
pub fn tile(cards: &[&Card], viewport: &Viewport, config: &LayoutConfig, z_start: u32) -> LayoutPlan {
    if cards.is_empty() {
        return LayoutPlan::default();
    }

    let grid = GridSpec::for_count(
        cards.len(),
        viewport.usable_rect(),
        shared_bounds(cards),
        config.default_card_size,
    );

    let placements = cards
        .iter()
        .enumerate()
        .map(|(k, card)| Placement {
            card_id: card.id,
            position: grid.cell_origin(k),
            dimensions: card.constraints.clamp(grid.cell),
            z_index: z_start.saturating_add(k as u32),
        })
        .collect();

    LayoutPlan { placements }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::test_support::card;
    use crate::config::ViewportConfig;
    use crate::math::{Size, Vec2};

    fn viewport() -> Viewport {
        Viewport::with_config(1200.0, 800.0, &ViewportConfig::default())
    }

    fn cards(n: u64) -> Vec<Card> {
        (1..=n)
            .map(|id| card(id, Vec2::new(10.0 * id as f32, 100.0), Size::new(400.0, 300.0)))
            .collect()
    }

    #[test]
    fn test_tile_empty() {
        let plan = tile(&[], &viewport(), &LayoutConfig::default(), 0);
        assert!(plan.is_empty());
    }

    #[test]
    fn test_tile_four_cards() {
        let owned = cards(4);
        let refs: Vec<&Card> = owned.iter().collect();
        let plan = tile(&refs, &viewport(), &LayoutConfig::default(), 1_000);

        assert_eq!(plan.len(), 4);
        let first = plan.get(1).unwrap();
        assert_eq!(first.position, Vec2::new(0.0, 64.0));
        assert_eq!(first.dimensions, Size::new(400.0, 344.0));
        assert_eq!(first.z_index, 1_000);

        let fourth = plan.get(4).unwrap();
        assert_eq!(fourth.position, Vec2::new(0.0, 408.0));
        assert_eq!(fourth.z_index, 1_003);
    }

    #[test]
    fn test_tile_no_overlap() {
        let owned = cards(7);
        let refs: Vec<&Card> = owned.iter().collect();
        let plan = tile(&refs, &viewport(), &LayoutConfig::default(), 0);

        for (i, a) in plan.placements.iter().enumerate() {
            for b in &plan.placements[i + 1..] {
                let ra = crate::math::Rect::from_pos_size(a.position, a.dimensions);
                let rb = crate::math::Rect::from_pos_size(b.position, b.dimensions);
                assert!(!ra.intersects(&rb), "{:?} overlaps {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_tile_single_card_is_clamped_to_max() {
        let owned = cards(1);
        let refs: Vec<&Card> = owned.iter().collect();
        let plan = tile(&refs, &viewport(), &LayoutConfig::default(), 0);
        assert_eq!(plan.placements[0].dimensions, Size::new(1000.0, 688.0));
    }
}
