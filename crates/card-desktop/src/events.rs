//! Outbound notifications for renderers and collaborators

use serde::Serialize;

use crate::card::{CardId, CardKind};
use crate::store::CardStore;

/// Card counts for the status indicator
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CardStatus {
    pub open: usize,
    pub minimized: usize,
    pub maximized: usize,
}

impl CardStatus {
    /// Count the cards currently in `store`
    pub fn of(store: &CardStore) -> Self {
        store.cards().iter().fold(Self::default(), |mut status, card| {
            status.open += 1;
            if card.is_minimized() {
                status.minimized += 1;
            }
            if card.is_maximized() {
                status.maximized += 1;
            }
            status
        })
    }
}

/// Something observers may want to react to
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum EngineEvent {
    CardOpened { card_id: CardId, kind: CardKind },
    CardClosed { card_id: CardId },
    /// Topmost non-minimized card changed (`None` when nothing is open)
    FocusChanged { card_id: Option<CardId> },
    ActiveTabChanged { card_id: CardId, tab: Option<String> },
    StatusChanged { status: CardStatus },
    /// A renderer reported that this card's content could not be shown
    ContentFailed { card_id: CardId, reason: String },
}
