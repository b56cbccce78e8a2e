//! Card store
//!
//! The single write path for card state. Every mutation goes through one of
//! the methods here so geometry clamping, band assignment and paint order are
//! enforced in one place. Unknown ids are ignored; bad geometry is clamped.
//!
//! The card list is kept sorted by z-index, so iteration order is paint order
//! (back to front).

mod arrange;
mod hit;
mod invariants;
mod mode;
mod tray;

use tracing::{debug, trace, warn};

use crate::card::{
    Card, CardConfig, CardContent, CardId, CardState, ContentStatus, SizeConstraints,
};
use crate::config::EngineConfig;
use crate::math::{Size, Vec2};
use crate::viewport::Viewport;
use crate::zindex::{Allocation, Band, ZIndexAllocator};

/// Canonical collection of open cards
#[derive(Debug)]
pub struct CardStore {
    /// Cards in paint order (ascending z-index)
    cards: Vec<Card>,
    /// Minimized cards in the order they entered the tray
    tray: Vec<CardId>,
    z_alloc: ZIndexAllocator,
    viewport: Viewport,
    config: EngineConfig,
    next_id: CardId,
}

impl Default for CardStore {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl CardStore {
    /// Create an empty store with a default 1920x1080 viewport
    pub fn new(config: EngineConfig) -> Self {
        let viewport = Viewport::with_config(1920.0, 1080.0, &config.viewport);
        Self {
            cards: Vec::new(),
            tray: Vec::new(),
            z_alloc: ZIndexAllocator::new(&config.z_bands),
            viewport,
            config,
            next_id: 1,
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// All cards, back to front
    #[inline]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    #[inline]
    pub fn contains(&self, id: CardId) -> bool {
        self.get(id).is_some()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Minimized cards in tray order
    #[inline]
    pub fn tray(&self) -> &[CardId] {
        &self.tray
    }

    /// Topmost card that is not minimized
    pub fn focused(&self) -> Option<CardId> {
        self.cards
            .iter()
            .rev()
            .find(|c| !c.is_minimized())
            .map(|c| c.id)
    }

    #[inline]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[inline]
    pub fn allocator(&self) -> &ZIndexAllocator {
        &self.z_alloc
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Open a new card on top of the normal band
    pub fn add_card(&mut self, config: CardConfig) -> CardId {
        let id = self.next_id;
        self.next_id += 1;

        let defaults = &self.config.cards;
        let constraints = config.constraints.unwrap_or(SizeConstraints::new(
            defaults.min_size,
            defaults.max_size,
            defaults.default_size,
        ));
        if constraints.is_misconfigured() {
            warn!(card_id = id, ?constraints, "size constraints have min > max, using default size");
        }

        let dimensions = constraints.clamp(config.size.unwrap_or(constraints.default));
        let requested = config
            .position
            .filter(|p| p.is_finite())
            .unwrap_or_else(|| self.cascade_position());
        let position = self.viewport.clamp_position(requested, dimensions);

        let mut group_keys = config.group_keys;
        group_keys.card_type.get_or_insert(config.kind);

        let allocation = self.z_alloc.allocate(Band::Focused);
        let z_index = self.apply_allocation(allocation);

        self.cards.push(Card {
            id,
            kind: config.kind,
            title: config.title.unwrap_or_else(|| config.kind.label().to_string()),
            position,
            dimensions,
            constraints,
            z_index,
            state: CardState::Normal,
            previous_state: None,
            group_keys,
            active_tab: config.active_tab,
            content: CardContent::new(config.initial_data),
            content_interactive: config.content_interactive,
        });
        self.sort_paint_order();

        debug!(card_id = id, kind = ?config.kind, z_index, "card opened");
        id
    }

    /// Auto-placement for cards opened without a position
    fn cascade_position(&self) -> Vec2 {
        let defaults = &self.config.cards;
        let step = (self.cards.len() as u32 % defaults.cascade_wrap.max(1)) as f32;
        defaults.origin + Vec2::new(step, step) * defaults.cascade_offset
    }

    /// Close a card
    pub fn remove_card(&mut self, id: CardId) -> &[Card] {
        let before = self.cards.len();
        self.cards.retain(|c| c.id != id);
        if self.cards.len() != before {
            debug!(card_id = id, "card closed");
            if self.tray.contains(&id) {
                self.tray.retain(|&tid| tid != id);
                self.reflow_tray();
            }
        }
        &self.cards
    }

    /// Close every card
    pub fn clear(&mut self) -> &[Card] {
        self.cards.clear();
        self.tray.clear();
        &self.cards
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Move and/or resize a normal card.
    ///
    /// Dimensions are clamped to the card's constraints, then the position is
    /// clamped into the usable viewport. Minimized and maximized cards are
    /// left alone; their geometry is owned by the tray and the viewport.
    pub fn update_geometry(
        &mut self,
        id: CardId,
        position: Option<Vec2>,
        dimensions: Option<Size>,
    ) -> &[Card] {
        let viewport = self.viewport;
        let Some(card) = self.cards.iter_mut().find(|c| c.id == id) else {
            trace!(card_id = id, "geometry update for unknown card ignored");
            return &self.cards;
        };
        if card.state != CardState::Normal {
            return &self.cards;
        }

        let dimensions = dimensions
            .filter(|d| d.width.is_finite() && d.height.is_finite())
            .map(|d| card.constraints.clamp(d))
            .unwrap_or(card.dimensions);
        let position = position.filter(|p| p.is_finite()).unwrap_or(card.position);

        card.dimensions = dimensions;
        card.position = viewport.clamp_position(position, dimensions);
        trace!(card_id = id, x = card.position.x, y = card.position.y, "geometry updated");
        &self.cards
    }

    /// Set a card's z-index directly.
    ///
    /// Values outside the card's legal band, beyond what the band has handed
    /// out so far, or held by another card are replaced by a fresh allocation.
    /// Tray cards are positional and cannot be re-stacked this way.
    pub fn set_z_index(&mut self, id: CardId, z_index: u32) -> &[Card] {
        let Some(card) = self.get(id) else {
            return &self.cards;
        };
        if card.is_minimized() {
            warn!(card_id = id, "z-index of a minimized card is owned by the tray");
            return &self.cards;
        }

        let legal = legal_bands(card.state)
            .iter()
            .any(|&band| self.z_alloc.contains(band, z_index) && z_index < self.z_alloc.peek(band));
        let taken = self.cards.iter().any(|c| c.id != id && c.z_index == z_index);

        let z_index = if legal && !taken {
            z_index
        } else {
            let band = if card.is_maximized() { Band::Maximized } else { Band::Focused };
            debug!(card_id = id, z_index, "rejected z-index, allocating from {} band", band.name());
            let allocation = self.z_alloc.allocate(band);
            self.apply_allocation(allocation)
        };

        if let Some(card) = self.card_mut(id) {
            card.z_index = z_index;
        }
        self.sort_paint_order();
        &self.cards
    }

    /// Raise a card to the top of its band.
    ///
    /// `Expanded` only marks cards just restored from the tray. Focusing a
    /// normal card folds those back into `Focused` (keeping their relative
    /// order) so the focused card ends up above every other normal card.
    pub fn focus(&mut self, id: CardId) -> &[Card] {
        let Some(card) = self.get(id) else {
            return &self.cards;
        };
        if card.is_minimized() {
            return &self.cards;
        }

        let band = if card.is_maximized() { Band::Maximized } else { Band::Focused };
        let expanded: Vec<CardId> = if band == Band::Focused {
            self.cards
                .iter()
                .filter(|c| c.id != id && self.z_alloc.contains(Band::Expanded, c.z_index))
                .map(|c| c.id)
                .collect()
        } else {
            Vec::new()
        };
        let current_band = self.z_alloc.band_of(card.z_index);
        let already_top = current_band == Some(band)
            && expanded.is_empty()
            && self
                .cards
                .iter()
                .filter(|c| c.id != id)
                .filter(|c| self.z_alloc.band_of(c.z_index).is_some_and(|b| b <= band))
                .all(|c| c.z_index < card.z_index);
        if already_top {
            return &self.cards;
        }

        // cards are in paint order, so `expanded` is already bottom-up
        for other in expanded {
            self.restack(other, Band::Focused);
        }
        let z_index = self.restack(id, band);
        self.sort_paint_order();
        debug!(card_id = id, z_index, "card focused");
        &self.cards
    }

    /// Minimize (`true`) or expand (`false`) a card
    pub fn set_minimized(&mut self, id: CardId, minimized: bool) -> &[Card] {
        if minimized {
            self.minimize(id);
        } else {
            self.expand(id);
        }
        &self.cards
    }

    /// Maximize (`true`) or return to normal (`false`)
    pub fn set_maximized(&mut self, id: CardId, maximized: bool) -> &[Card] {
        if maximized {
            self.maximize(id);
        } else {
            self.unmaximize(id);
        }
        &self.cards
    }

    // =========================================================================
    // Per-card metadata
    // =========================================================================

    /// Change the active tab, returning true if it changed
    pub fn set_active_tab(&mut self, id: CardId, tab: Option<String>) -> bool {
        match self.card_mut(id) {
            Some(card) if card.active_tab != tab => {
                card.active_tab = tab;
                true
            }
            _ => false,
        }
    }

    /// Record the renderer's content health, returning true if it changed
    pub fn set_content_status(&mut self, id: CardId, status: ContentStatus) -> bool {
        match self.card_mut(id) {
            Some(card) if card.content.status != status => {
                card.content.status = status;
                true
            }
            _ => false,
        }
    }

    // =========================================================================
    // Viewport
    // =========================================================================

    /// Apply a new viewport size, re-fitting every card
    pub fn set_viewport(&mut self, width: f32, height: f32) -> &[Card] {
        self.viewport = Viewport::with_config(width.max(0.0), height.max(0.0), &self.config.viewport);
        let viewport = self.viewport;
        let usable = viewport.usable_rect();

        for card in &mut self.cards {
            match card.state {
                CardState::Normal => {
                    card.position = viewport.clamp_position(card.position, card.dimensions);
                }
                CardState::Maximized => {
                    card.position = usable.position();
                    card.dimensions = usable.size();
                }
                CardState::Minimized => {}
            }
        }
        self.reflow_tray();
        debug!(width, height, "viewport resized");
        &self.cards
    }

    // =========================================================================
    // Internals
    // =========================================================================

    pub(crate) fn card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.iter_mut().find(|c| c.id == id)
    }

    /// Apply any band widening to existing cards and return the new value
    fn apply_allocation(&mut self, allocation: Allocation) -> u32 {
        if let Some(shift) = allocation.shift {
            for card in &mut self.cards {
                card.z_index = shift.apply(card.z_index);
            }
        }
        allocation.z_index
    }

    /// Move a card to a fresh value from `band`, returning it
    fn restack(&mut self, id: CardId, band: Band) -> u32 {
        let allocation = self.z_alloc.allocate(band);
        let z_index = self.apply_allocation(allocation);
        if let Some(card) = self.card_mut(id) {
            card.z_index = z_index;
        }
        z_index
    }

    fn sort_paint_order(&mut self) {
        self.cards.sort_by_key(|c| c.z_index);
    }
}

/// Bands a card in `state` may take its z-index from
fn legal_bands(state: CardState) -> &'static [Band] {
    match state {
        CardState::Minimized => &[Band::Minimized],
        CardState::Normal => &[Band::Base, Band::Focused, Band::Expanded],
        CardState::Maximized => &[Band::Maximized],
    }
}
