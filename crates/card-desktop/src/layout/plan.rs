//! Layout output

use serde::Serialize;

use crate::card::CardId;
use crate::math::{Size, Vec2};

/// Target geometry and stacking for one card
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    pub card_id: CardId,
    pub position: Vec2,
    pub dimensions: Size,
    pub z_index: u32,
}

/// Result of a layout pass, applied atomically by the store
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct LayoutPlan {
    pub placements: Vec<Placement>,
}

impl LayoutPlan {
    #[inline]
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Placement for `card_id`, if it takes part
    pub fn get(&self, card_id: CardId) -> Option<&Placement> {
        self.placements.iter().find(|p| p.card_id == card_id)
    }
}
