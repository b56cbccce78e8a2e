//! Consistency checks over the whole card collection

use std::collections::HashMap;

use crate::card::{Card, CardId, CardState};
use crate::error::InvariantViolation;
use super::{legal_bands, CardStore};

impl CardStore {
    /// Verify the collection-wide guarantees the store maintains.
    ///
    /// Returns the first violation found. Used by tests and debug tooling;
    /// the mutation paths never produce a violation on their own.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let mut seen: HashMap<u32, CardId> = HashMap::with_capacity(self.cards.len());
        for card in &self.cards {
            if let Some(&first) = seen.get(&card.z_index) {
                return Err(InvariantViolation::DuplicateZIndex {
                    first,
                    second: card.id,
                    z_index: card.z_index,
                });
            }
            seen.insert(card.z_index, card.id);

            self.check_band(card)?;
            self.check_geometry(card)?;
            check_snapshot(card)?;
        }
        Ok(())
    }

    fn check_band(&self, card: &Card) -> Result<(), InvariantViolation> {
        let expected = match card.state {
            CardState::Minimized => "minimized",
            CardState::Maximized => "maximized",
            CardState::Normal => "normal",
        };
        let in_band = legal_bands(card.state)
            .iter()
            .any(|&band| self.z_alloc.contains(band, card.z_index));
        if in_band {
            Ok(())
        } else {
            Err(InvariantViolation::WrongBand {
                card_id: card.id,
                z_index: card.z_index,
                expected,
            })
        }
    }

    fn check_geometry(&self, card: &Card) -> Result<(), InvariantViolation> {
        if card.is_maximized() {
            return Ok(());
        }
        if !card.constraints.resolve().contains(card.dimensions) {
            return Err(InvariantViolation::SizeOutOfBounds {
                card_id: card.id,
                width: card.dimensions.width,
                height: card.dimensions.height,
            });
        }
        if !card.is_minimized() && !self.viewport.intersects_usable(&card.rect()) {
            return Err(InvariantViolation::OffViewport {
                card_id: card.id,
                x: card.position.x,
                y: card.position.y,
            });
        }
        Ok(())
    }
}

fn check_snapshot(card: &Card) -> Result<(), InvariantViolation> {
    match (card.state, card.previous_state.is_some()) {
        (CardState::Normal, true) => Err(InvariantViolation::StaleSnapshot { card_id: card.id }),
        (CardState::Minimized | CardState::Maximized, false) => {
            Err(InvariantViolation::MissingSnapshot { card_id: card.id })
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{open, store};
    use super::*;

    #[test]
    fn test_detects_duplicate_z() {
        let mut store = store();
        let a = open(&mut store, 0.0, 100.0);
        let b = open(&mut store, 100.0, 100.0);
        let za = store.get(a).unwrap().z_index;
        store.card_mut(b).unwrap().z_index = za;

        assert!(matches!(
            store.check_invariants(),
            Err(InvariantViolation::DuplicateZIndex { .. })
        ));
    }

    #[test]
    fn test_detects_wrong_band() {
        let mut store = store();
        let a = open(&mut store, 0.0, 100.0);
        store.card_mut(a).unwrap().state = CardState::Maximized;

        assert!(matches!(
            store.check_invariants(),
            Err(InvariantViolation::WrongBand { expected: "maximized", .. })
        ));
    }

    #[test]
    fn test_detects_stale_snapshot() {
        let mut store = store();
        let a = open(&mut store, 0.0, 100.0);
        let snapshot = store.get(a).unwrap().snapshot();
        store.card_mut(a).unwrap().previous_state = Some(snapshot);

        assert_eq!(
            store.check_invariants(),
            Err(InvariantViolation::StaleSnapshot { card_id: a })
        );
    }
}
