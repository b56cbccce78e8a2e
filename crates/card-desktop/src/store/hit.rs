//! Pointer hit testing against card chrome

use crate::card::{Card, CardId, CardRegion, ResizeHandle, CHROME};
use crate::math::Vec2;
use super::CardStore;

impl CardStore {
    /// Topmost card under `pos`
    pub fn card_at(&self, pos: Vec2) -> Option<CardId> {
        self.region_at(pos).map(|(id, _)| id)
    }

    /// Topmost card under `pos` and the chrome region that was hit.
    ///
    /// Tray cards only expose their header strip.
    pub fn region_at(&self, pos: Vec2) -> Option<(CardId, CardRegion)> {
        self.cards
            .iter()
            .rev()
            .find_map(|card| hit_test_card(card, pos).map(|region| (card.id, region)))
    }
}

fn hit_test_card(card: &Card, pos: Vec2) -> Option<CardRegion> {
    if card.is_minimized() {
        if !card.title_bar_rect().contains(pos) {
            return None;
        }
        return hit_test_buttons(card, pos).or(Some(CardRegion::TitleBar));
    }

    if !card.rect().contains(pos) {
        return None;
    }

    if let Some(region) = hit_test_buttons(card, pos) {
        return Some(region);
    }

    // Maximized cards fill the viewport and cannot be resized
    if !card.is_maximized() {
        if let Some(handle) = hit_test_resize_corners(card, pos) {
            return Some(CardRegion::Resize(handle));
        }
    }

    if card.title_bar_rect().contains(pos) {
        return Some(CardRegion::TitleBar);
    }

    if !card.is_maximized() {
        if let Some(handle) = hit_test_resize_edges(card, pos) {
            return Some(CardRegion::Resize(handle));
        }
    }

    Some(CardRegion::Content)
}

fn hit_test_buttons(card: &Card, pos: Vec2) -> Option<CardRegion> {
    if card.close_button_rect().contains(pos) {
        return Some(CardRegion::CloseButton);
    }
    if card.maximize_button_rect().contains(pos) {
        return Some(CardRegion::MaximizeButton);
    }
    if card.minimize_button_rect().contains(pos) {
        return Some(CardRegion::MinimizeButton);
    }
    None
}

fn hit_test_resize_corners(card: &Card, pos: Vec2) -> Option<ResizeHandle> {
    let corner = CHROME.corner_handle_size;
    let rect = card.rect();

    let left = pos.x < rect.x + corner;
    let right = pos.x > rect.right() - corner;
    let top = pos.y < rect.y + corner;
    let bottom = pos.y > rect.bottom() - corner;

    match (top, bottom, left, right) {
        (true, _, true, _) => Some(ResizeHandle::NW),
        (true, _, _, true) => Some(ResizeHandle::NE),
        (_, true, true, _) => Some(ResizeHandle::SW),
        (_, true, _, true) => Some(ResizeHandle::SE),
        _ => None,
    }
}

fn hit_test_resize_edges(card: &Card, pos: Vec2) -> Option<ResizeHandle> {
    let edge = CHROME.resize_handle_size;
    let rect = card.rect();

    if pos.y < rect.y + edge {
        return Some(ResizeHandle::N);
    }
    if pos.y > rect.bottom() - edge {
        return Some(ResizeHandle::S);
    }
    if pos.x < rect.x + edge {
        return Some(ResizeHandle::W);
    }
    if pos.x > rect.right() - edge {
        return Some(ResizeHandle::E);
    }
    None
}
