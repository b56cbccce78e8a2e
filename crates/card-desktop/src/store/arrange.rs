//! Bulk commands: layouts and tray-wide operations

use tracing::debug;

use crate::card::{Card, CardId, CardState, GroupBy};
use crate::layout::{self, LayoutPlan};
use crate::zindex::Band;
use super::CardStore;

impl CardStore {
    /// Apply a layout plan in one step.
    ///
    /// Every placed card returns to normal mode, drops any pending snapshot
    /// and takes the planned geometry, clamped to its constraints. A planned
    /// z-index that is not a free, issued base value is replaced.
    pub fn apply_layout(&mut self, plan: &LayoutPlan) -> &[Card] {
        let viewport = self.viewport;
        for placement in &plan.placements {
            let Some(card) = self.get(placement.card_id) else {
                continue;
            };
            if card.is_minimized() {
                continue;
            }

            let z_ok = self.z_alloc.contains(Band::Base, placement.z_index)
                && placement.z_index < self.z_alloc.peek(Band::Base)
                && !self
                    .cards
                    .iter()
                    .any(|c| c.id != placement.card_id && c.z_index == placement.z_index);
            let z_index = if z_ok {
                placement.z_index
            } else {
                let allocation = self.z_alloc.allocate(Band::Base);
                self.apply_allocation(allocation)
            };

            let Some(card) = self.card_mut(placement.card_id) else {
                continue;
            };
            card.state = CardState::Normal;
            card.previous_state = None;
            card.dimensions = card.constraints.clamp(placement.dimensions);
            card.position = placement.position;
            if !viewport.intersects_usable(&card.rect()) {
                card.position = viewport.clamp_position(card.position, card.dimensions);
            }
            card.z_index = z_index;
        }
        self.sort_paint_order();
        &self.cards
    }

    /// Cards taking part in a layout, in creation order
    fn layout_participants(&self) -> Vec<&Card> {
        let mut cards: Vec<&Card> = self.cards.iter().filter(|c| !c.is_minimized()).collect();
        cards.sort_by_key(|c| c.id);
        cards
    }

    /// Reserve base-band values for `count` layout placements
    fn reserve_layout_z(&mut self, count: usize) -> u32 {
        let allocation = self.z_alloc.reserve(Band::Base, count as u32);
        self.apply_allocation(allocation)
    }

    /// Tile every open, non-minimized card into a grid
    pub fn tile_all(&mut self) -> &[Card] {
        let count = self.cards.iter().filter(|c| !c.is_minimized()).count();
        if count == 0 {
            return &self.cards;
        }
        let z_start = self.reserve_layout_z(count);
        let plan = layout::tile(
            &self.layout_participants(),
            &self.viewport,
            &self.config.layout,
            z_start,
        );
        debug!(cards = plan.len(), "tiled cards");
        self.apply_layout(&plan)
    }

    /// Stack non-minimized cards into one cascade per group
    pub fn stack_by(&mut self, group_by: GroupBy) -> &[Card] {
        let count = self.cards.iter().filter(|c| !c.is_minimized()).count();
        if count == 0 {
            return &self.cards;
        }
        let z_start = self.reserve_layout_z(count);
        let plan = layout::stack_by(
            &self.layout_participants(),
            group_by,
            &self.viewport,
            &self.config.layout,
            z_start,
        );
        debug!(cards = plan.len(), ?group_by, "stacked cards by group");
        self.apply_layout(&plan)
    }

    /// Send every card to the tray, oldest first
    pub fn minimize_all(&mut self) -> &[Card] {
        let mut ids: Vec<CardId> = self
            .cards
            .iter()
            .filter(|c| !c.is_minimized())
            .map(|c| c.id)
            .collect();
        ids.sort_unstable();
        for id in ids {
            self.minimize(id);
        }
        &self.cards
    }

    /// Bring every tray card back, in the order they were minimized
    pub fn restore_all(&mut self) -> &[Card] {
        for id in self.tray.clone() {
            self.expand(id);
        }
        &self.cards
    }
}
