//! Input result type

use serde::Serialize;

use crate::card::CardId;

/// Result of input handling
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InputResult {
    /// Input was consumed by the engine
    Handled,
    /// Input did not hit anything the engine manages
    Unhandled,
    /// Input belongs to the card body's own controls
    Forward {
        card_id: CardId,
        /// Pointer position relative to the card origin
        local_x: f32,
        local_y: f32,
    },
}

impl InputResult {
    #[inline]
    pub fn is_handled(&self) -> bool {
        matches!(self, InputResult::Handled | InputResult::Forward { .. })
    }

    #[inline]
    pub fn is_forward(&self) -> bool {
        matches!(self, InputResult::Forward { .. })
    }
}
