//! Inbound intents as data
//!
//! Hosts that talk to the engine through a message channel (or across the
//! wasm boundary) send [`EngineCommand`]s instead of calling methods.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::card::{CardConfig, CardId, GroupBy};
use crate::math::{Size, Vec2};
use super::CardEngine;

/// One inbound intent
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum EngineCommand {
    OpenCard(CardConfig),
    DragTo { card_id: CardId, x: f32, y: f32 },
    ResizeTo { card_id: CardId, width: f32, height: f32 },
    Minimize { card_id: CardId },
    Maximize { card_id: CardId },
    Restore { card_id: CardId },
    Close { card_id: CardId },
    Focus { card_id: CardId },
    SetActiveTab { card_id: CardId, tab: Option<String> },
    TileAll,
    MinimizeAll,
    RestoreAll,
    CloseAll,
    StackBy { group_by: GroupBy },
    SetViewport { width: f32, height: f32 },
}

impl CardEngine {
    /// Apply a command. Returns the id of the opened card for `OpenCard`.
    pub fn apply(&mut self, command: EngineCommand) -> Option<CardId> {
        debug!(?command, "applying command");
        match command {
            EngineCommand::OpenCard(config) => return Some(self.open_card(config)),
            EngineCommand::DragTo { card_id, x, y } => self.on_drag_to(card_id, Vec2::new(x, y)),
            EngineCommand::ResizeTo {
                card_id,
                width,
                height,
            } => self.on_resize_to(card_id, Size::new(width, height)),
            EngineCommand::Minimize { card_id } => self.on_minimize(card_id),
            EngineCommand::Maximize { card_id } => self.on_maximize(card_id),
            EngineCommand::Restore { card_id } => self.on_restore(card_id),
            EngineCommand::Close { card_id } => self.on_close(card_id),
            EngineCommand::Focus { card_id } => self.on_focus(card_id),
            EngineCommand::SetActiveTab { card_id, tab } => self.set_active_tab(card_id, tab),
            EngineCommand::TileAll => self.tile_all(),
            EngineCommand::MinimizeAll => self.minimize_all(),
            EngineCommand::RestoreAll => self.restore_all(),
            EngineCommand::CloseAll => self.close_all(),
            EngineCommand::StackBy { group_by } => self.stack_by(group_by),
            EngineCommand::SetViewport { width, height } => self.set_viewport(width, height),
        }
        None
    }
}
