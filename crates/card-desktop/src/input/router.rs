//! Input router state machine: `Idle <-> Dragging/Resizing`

use crate::card::{CardId, ResizeHandle};
use crate::math::{Size, Vec2};
use super::DragState;

/// Holds the in-flight interaction, if any
#[derive(Debug, Default)]
pub struct InputRouter {
    drag: Option<DragState>,
}

impl InputRouter {
    pub fn new() -> Self {
        Self { drag: None }
    }

    #[inline]
    pub fn drag_state(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    /// Check if an interaction is in flight
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Enter the move state for `card_id`
    pub fn start_move(&mut self, card_id: CardId, offset: Vec2) {
        self.drag = Some(DragState::MoveCard { card_id, offset });
    }

    /// Enter the resize state bound to `handle`
    pub fn start_resize(
        &mut self,
        card_id: CardId,
        handle: ResizeHandle,
        start_pos: Vec2,
        start_size: Size,
        start_pointer: Vec2,
    ) {
        self.drag = Some(DragState::ResizeCard {
            card_id,
            handle,
            start_pos,
            start_size,
            start_pointer,
        });
    }

    /// Return to idle, handing back the finished interaction
    pub fn end(&mut self) -> Option<DragState> {
        self.drag.take()
    }

    /// Drop the interaction if it targets `card_id` (card closed mid-drag)
    pub fn forget(&mut self, card_id: CardId) -> bool {
        if self.drag.as_ref().map(DragState::card_id) == Some(card_id) {
            self.drag = None;
            true
        } else {
            false
        }
    }
}
