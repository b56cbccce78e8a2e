//! In-flight interaction state

use crate::card::{CardId, ResizeHandle};
use crate::math::{Size, Vec2};

/// Current pointer interaction. `None` in the router means idle.
#[derive(Clone, Debug, PartialEq)]
pub enum DragState {
    /// Moving a card
    MoveCard {
        card_id: CardId,
        /// Offset from card origin to pointer at pointer-down
        offset: Vec2,
    },
    /// Resizing a card
    ResizeCard {
        card_id: CardId,
        handle: ResizeHandle,
        start_pos: Vec2,
        start_size: Size,
        start_pointer: Vec2,
    },
}

impl DragState {
    /// Card this interaction is bound to
    pub fn card_id(&self) -> CardId {
        match self {
            DragState::MoveCard { card_id, .. } | DragState::ResizeCard { card_id, .. } => *card_id,
        }
    }
}
