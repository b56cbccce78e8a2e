//! Card engine coordinating all components
//!
//! This module is split into focused submodules:
//! - `cards`: card lifecycle, per-card intents and layout commands
//! - `input`: pointer and keyboard handling, drag and resize
//! - `commands`: the same inbound contract expressed as data
//!
//! The engine is the single writer of card state. Every inbound intent runs
//! to completion synchronously; observers read the paint-ordered card list
//! and drain queued [`EngineEvent`]s afterwards.

mod cards;
mod commands;
mod input;

pub use commands::EngineCommand;

use tracing::trace;

use crate::card::{Card, CardId};
use crate::config::EngineConfig;
use crate::dropdown::DropdownController;
use crate::events::{CardStatus, EngineEvent};
use crate::input::InputRouter;
use crate::store::CardStore;
use crate::viewport::Viewport;

/// Card engine coordinating all card-window components
///
/// Owns:
/// - the card store (geometry, modes, z-order)
/// - the input router (drag/resize state machine)
/// - the dropdown controller (at most one open menu)
pub struct CardEngine {
    /// Card store
    pub store: CardStore,
    /// Input router
    pub input: InputRouter,
    /// Open dropdown, if any
    pub dropdown: DropdownController,
    events: Vec<EngineEvent>,
    last_focus: Option<CardId>,
    last_status: CardStatus,
}

impl Default for CardEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl CardEngine {
    /// Create an engine with the given configuration
    pub fn new(config: EngineConfig) -> Self {
        let dropdown = DropdownController::new(config.dropdown.clone());
        Self {
            store: CardStore::new(config),
            input: InputRouter::new(),
            dropdown,
            events: Vec::new(),
            last_focus: None,
            last_status: CardStatus::default(),
        }
    }

    /// Initialize with screen dimensions
    pub fn init(&mut self, width: f32, height: f32) {
        self.set_viewport(width, height);
    }

    /// Resize the viewport, re-fitting every card
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.store.set_viewport(width, height);
        self.sync();
    }

    // =========================================================================
    // Outbound
    // =========================================================================

    /// Cards in paint order, back to front
    #[inline]
    pub fn cards(&self) -> &[Card] {
        self.store.cards()
    }

    /// Cards sorted by descending z-index (topmost first)
    pub fn cards_by_z(&self) -> Vec<&Card> {
        self.store.cards().iter().rev().collect()
    }

    #[inline]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.store.get(id)
    }

    #[inline]
    pub fn focused(&self) -> Option<CardId> {
        self.store.focused()
    }

    #[inline]
    pub fn status(&self) -> CardStatus {
        CardStatus::of(&self.store)
    }

    #[inline]
    pub fn viewport(&self) -> &Viewport {
        self.store.viewport()
    }

    /// Take every event queued since the last call
    pub fn drain_events(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.events)
    }

    // =========================================================================
    // Internals
    // =========================================================================

    pub(crate) fn emit(&mut self, event: EngineEvent) {
        trace!(?event, "engine event");
        self.events.push(event);
    }

    /// Queue focus and status changes caused by the last mutation
    pub(crate) fn sync(&mut self) {
        let focus = self.store.focused();
        if focus != self.last_focus {
            self.last_focus = focus;
            self.emit(EngineEvent::FocusChanged { card_id: focus });
        }

        let status = self.status();
        if status != self.last_status {
            self.last_status = status;
            self.emit(EngineEvent::StatusChanged { status });
        }
    }
}
