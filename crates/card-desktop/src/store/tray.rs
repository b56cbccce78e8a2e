//! Minimized card tray
//!
//! Minimized cards stack up from the bottom-left corner of the viewport,
//! each one offset right and up from the previous. Slots are dense: when a
//! card leaves the tray the remaining ones close the gap, keeping the order
//! in which they were minimized.

use crate::math::Vec2;
use super::CardStore;

impl CardStore {
    /// Top-left corner of tray slot `slot`
    pub fn tray_position(&self, slot: usize) -> Vec2 {
        let tray = &self.config.tray;
        let i = slot as f32;
        Vec2::new(
            tray.margin_x + i * tray.column_offset,
            self.viewport.size.height - tray.margin_y - i * tray.row_offset,
        )
    }

    /// Re-pack every tray card into its slot
    pub(super) fn reflow_tray(&mut self) {
        for slot in 0..self.tray.len() {
            let id = self.tray[slot];
            let position = self.tray_position(slot);
            let allocation = self.z_alloc.minimized_slot(slot);
            let z_index = self.apply_allocation(allocation);
            if let Some(card) = self.card_mut(id) {
                card.position = position;
                card.z_index = z_index;
            }
        }
        self.sort_paint_order();
    }
}
