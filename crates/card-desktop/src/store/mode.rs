//! Minimize / maximize / restore transitions
//!
//! ```text
//!             minimize                 maximize
//!   Minimized <-------- Normal --------> Maximized
//!       |     -------->   ^   <--------     |
//!       |      expand     |    unmaximize   |
//!       +-----------------+-----------------+
//!                 minimize (keeps was_maximized)
//! ```
//!
//! Each transition away from `Normal` captures a [`GeometrySnapshot`]; the
//! matching transition back consumes it, so a restore happens at most once
//! per capture.

use tracing::debug;

use crate::card::{CardId, CardState, GeometrySnapshot};
use crate::zindex::Band;
use super::CardStore;

impl CardStore {
    /// Send a card to the tray, remembering where it came from
    pub fn minimize(&mut self, id: CardId) {
        let slot = self.tray.len();
        let position = self.tray_position(slot);
        let Some(card) = self.card_mut(id) else {
            return;
        };
        if card.is_minimized() {
            return;
        }

        let snapshot = match (card.state, card.previous_state) {
            // Keep the pre-maximize geometry, but remember the mode
            (CardState::Maximized, Some(normal)) => GeometrySnapshot {
                was_maximized: true,
                ..normal
            },
            _ => card.snapshot(),
        };
        card.previous_state = Some(snapshot);
        card.state = CardState::Minimized;
        card.position = position;
        card.dimensions = snapshot.dimensions;

        self.tray.push(id);
        let allocation = self.z_alloc.minimized_slot(slot);
        let z_index = self.apply_allocation(allocation);
        if let Some(card) = self.card_mut(id) {
            card.z_index = z_index;
        }
        self.sort_paint_order();
        debug!(card_id = id, slot, "card minimized");
    }

    /// Bring a card back from the tray to its remembered geometry
    pub fn expand(&mut self, id: CardId) {
        let viewport = self.viewport;
        let remaximize = self.config.tray.remaximize_on_restore;
        let Some(card) = self.card_mut(id) else {
            return;
        };
        if !card.is_minimized() {
            return;
        }

        let snapshot = card.previous_state.take();
        let restored = snapshot.map_or(card.dimensions, |s| s.dimensions);
        let dimensions = card.constraints.clamp(restored);
        let position = viewport.clamp_position(
            snapshot.map_or(card.position, |s| s.position),
            dimensions,
        );
        card.position = position;
        card.dimensions = dimensions;
        card.state = CardState::Normal;

        let band = if remaximize && snapshot.is_some_and(|s| s.was_maximized) {
            let usable = viewport.usable_rect();
            card.previous_state = Some(card.snapshot());
            card.state = CardState::Maximized;
            card.position = usable.position();
            card.dimensions = usable.size();
            Band::Maximized
        } else {
            Band::Expanded
        };

        self.tray.retain(|&tid| tid != id);
        let allocation = self.z_alloc.allocate(band);
        let z_index = self.apply_allocation(allocation);
        if let Some(card) = self.card_mut(id) {
            card.z_index = z_index;
        }
        self.reflow_tray();
        debug!(card_id = id, band = band.name(), "card expanded");
    }

    /// Fill the usable viewport
    pub fn maximize(&mut self, id: CardId) {
        match self.get(id).map(|c| c.state) {
            None | Some(CardState::Maximized) => return,
            Some(CardState::Minimized) => self.expand(id),
            Some(CardState::Normal) => {}
        }

        let usable = self.viewport.usable_rect();
        let Some(card) = self.card_mut(id) else {
            return;
        };
        // A remaximizing expand may already have landed here
        if card.is_maximized() {
            return;
        }
        card.previous_state = Some(card.snapshot());
        card.state = CardState::Maximized;
        card.position = usable.position();
        card.dimensions = usable.size();

        let allocation = self.z_alloc.allocate(Band::Maximized);
        let z_index = self.apply_allocation(allocation);
        if let Some(card) = self.card_mut(id) {
            card.z_index = z_index;
        }
        self.sort_paint_order();
        debug!(card_id = id, "card maximized");
    }

    /// Return a maximized card to its pre-maximize geometry
    pub fn unmaximize(&mut self, id: CardId) {
        let viewport = self.viewport;
        let Some(card) = self.card_mut(id) else {
            return;
        };
        if !card.is_maximized() {
            return;
        }

        let snapshot = card.previous_state.take();
        let dimensions = card
            .constraints
            .clamp(snapshot.map_or(card.constraints.default, |s| s.dimensions));
        let position = viewport.clamp_position(
            snapshot.map_or(card.position, |s| s.position),
            dimensions,
        );
        card.position = position;
        card.dimensions = dimensions;
        card.state = CardState::Normal;

        let allocation = self.z_alloc.allocate(Band::Focused);
        let z_index = self.apply_allocation(allocation);
        if let Some(card) = self.card_mut(id) {
            card.z_index = z_index;
        }
        self.sort_paint_order();
        debug!(card_id = id, "card unmaximized");
    }

    /// Maximize a normal card, or restore a maximized one
    pub fn toggle_maximize(&mut self, id: CardId) {
        match self.get(id).map(|c| c.state) {
            Some(CardState::Maximized) => self.unmaximize(id),
            Some(_) => self.maximize(id),
            None => {}
        }
    }

    /// Leave whichever non-normal mode the card is in
    pub fn restore(&mut self, id: CardId) {
        match self.get(id).map(|c| c.state) {
            Some(CardState::Minimized) => self.expand(id),
            Some(CardState::Maximized) => self.unmaximize(id),
            _ => {}
        }
    }
}
