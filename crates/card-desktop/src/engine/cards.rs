//! Card lifecycle and per-card intents

use tracing::debug;

use crate::card::{CardConfig, CardId, ContentStatus, GroupBy};
use crate::events::EngineEvent;
use crate::math::{Size, Vec2};
use super::CardEngine;

impl CardEngine {
    /// Open a new card on top
    pub fn open_card(&mut self, config: CardConfig) -> CardId {
        let kind = config.kind;
        let card_id = self.store.add_card(config);
        self.emit(EngineEvent::CardOpened { card_id, kind });
        self.sync();
        card_id
    }

    /// Close a card, dropping any interaction bound to it
    pub fn on_close(&mut self, id: CardId) {
        if !self.store.contains(id) {
            return;
        }
        if self.input.forget(id) {
            debug!(card_id = id, "closed card mid-interaction");
        }
        self.store.remove_card(id);
        self.emit(EngineEvent::CardClosed { card_id: id });
        self.sync();
    }

    /// Close every card
    pub fn close_all(&mut self) {
        let ids: Vec<CardId> = self.store.cards().iter().map(|c| c.id).collect();
        self.input.end();
        for id in ids {
            self.on_close(id);
        }
    }

    /// Move a card, clamped into the usable viewport
    pub fn on_drag_to(&mut self, id: CardId, position: Vec2) {
        self.store.update_geometry(id, Some(position), None);
    }

    /// Resize a card, clamped to its constraints
    pub fn on_resize_to(&mut self, id: CardId, dimensions: Size) {
        self.store.update_geometry(id, None, Some(dimensions));
    }

    /// Raise a card; a tray card is expanded instead
    pub fn on_focus(&mut self, id: CardId) {
        let Some(minimized) = self.store.get(id).map(|c| c.is_minimized()) else {
            return;
        };
        if minimized {
            self.store.expand(id);
        } else {
            self.store.focus(id);
        }
        self.sync();
    }

    /// Send a card to the tray
    pub fn on_minimize(&mut self, id: CardId) {
        self.store.minimize(id);
        self.sync();
    }

    /// Toggle between maximized and normal
    pub fn on_maximize(&mut self, id: CardId) {
        self.store.toggle_maximize(id);
        self.sync();
    }

    /// Return a card from the tray or from maximized
    pub fn on_restore(&mut self, id: CardId) {
        self.store.restore(id);
        self.sync();
    }

    /// Change the tab shown inside a card
    pub fn set_active_tab(&mut self, id: CardId, tab: Option<String>) {
        if self.store.set_active_tab(id, tab.clone()) {
            self.emit(EngineEvent::ActiveTabChanged { card_id: id, tab });
        }
    }

    /// Mark a card's content as failed so it renders a fallback panel.
    ///
    /// Only this card is affected; geometry and siblings are untouched.
    pub fn report_content_failure(&mut self, id: CardId, reason: impl Into<String>) {
        let reason = reason.into();
        let status = ContentStatus::Failed {
            reason: reason.clone(),
        };
        if self.store.set_content_status(id, status) {
            debug!(card_id = id, %reason, "card content failed");
            self.emit(EngineEvent::ContentFailed { card_id: id, reason });
        }
    }

    /// Clear a content failure, e.g. after the user retries
    pub fn reset_content(&mut self, id: CardId) {
        self.store.set_content_status(id, ContentStatus::Ready);
    }

    // =========================================================================
    // Layout commands
    // =========================================================================

    /// Arrange all non-minimized cards in a grid
    pub fn tile_all(&mut self) {
        self.input.end();
        self.store.tile_all();
        self.sync();
    }

    /// Cascade non-minimized cards in one cell per group
    pub fn stack_by(&mut self, group_by: GroupBy) {
        self.input.end();
        self.store.stack_by(group_by);
        self.sync();
    }

    pub fn minimize_all(&mut self) {
        self.input.end();
        self.store.minimize_all();
        self.sync();
    }

    pub fn restore_all(&mut self) {
        self.store.restore_all();
        self.sync();
    }
}
