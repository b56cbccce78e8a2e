//! Group stacking

use crate::card::{Card, GroupBy, GroupKey};
use crate::config::LayoutConfig;
use crate::math::{Size, Vec2};
use crate::viewport::Viewport;
use super::{shared_bounds, GridSpec, LayoutPlan, Placement};

/// Split cards by their key under `group_by`, keeping groups in the order
/// their first member appears. Cards without a value share one group.
pub fn partition<'a>(cards: &[&'a Card], group_by: GroupBy) -> Vec<(GroupKey, Vec<&'a Card>)> {
    let mut groups: Vec<(GroupKey, Vec<&'a Card>)> = Vec::new();
    for &card in cards {
        let key = card.group_key(group_by);
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, members)) => members.push(card),
            None => groups.push((key, vec![card])),
        }
    }
    groups
}

/// Give each group a grid cell and cascade its members inside it.
///
/// Member `j` of a group of `k` sits `j * cascade_offset` right and down from
/// the cell origin and is shrunk by `(k - 1) * cascade_offset` so the cascade
/// stays inside the cell. Later members stack on top.
pub fn stack_by(
    cards: &[&Card],
    group_by: GroupBy,
    viewport: &Viewport,
    config: &LayoutConfig,
    z_start: u32,
) -> LayoutPlan {
    if cards.is_empty() {
        return LayoutPlan::default();
    }

    let groups = partition(cards, group_by);
    let grid = GridSpec::for_count(
        groups.len(),
        viewport.usable_rect(),
        shared_bounds(cards),
        config.default_card_size,
    );

    let offset = config.cascade_offset.max(0.0);
    let mut placements = Vec::with_capacity(cards.len());
    for (cell, (_, members)) in groups.iter().enumerate() {
        let origin = grid.cell_origin(cell);
        let shrink = offset * (members.len() - 1) as f32;
        let target = Size::new(
            (grid.cell.width - shrink).max(0.0),
            (grid.cell.height - shrink).max(0.0),
        );

        for (j, card) in members.iter().enumerate() {
            let step = offset * j as f32;
            placements.push(Placement {
                card_id: card.id,
                position: origin + Vec2::new(step, step),
                dimensions: card.constraints.clamp(target),
                z_index: z_start.saturating_add(placements.len() as u32),
            });
        }
    }

    LayoutPlan { placements }
}
