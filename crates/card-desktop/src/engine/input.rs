//! Pointer and keyboard handling for drag and resize

use tracing::{trace, warn};

use crate::card::{CardId, CardRegion, CardState, ResizeHandle};
use crate::dropdown::{AnchorId, DropdownPlacement, ViewportGeometry};
use crate::input::{calculate_resize, DragState, InputResult, PointerTarget};
use crate::math::{Size, Vec2};
use super::CardEngine;

impl CardEngine {
    /// Handle pointer down at viewport coordinates, hit testing the cards
    pub fn handle_pointer_down(&mut self, x: f32, y: f32) -> InputResult {
        let pos = Vec2::new(x, y);
        match self.store.region_at(pos) {
            Some((card_id, region)) => self.on_pointer_down(PointerTarget::chrome(card_id, region), pos),
            None => InputResult::Unhandled,
        }
    }

    /// Handle pointer down on a target resolved by the renderer
    pub fn on_pointer_down(&mut self, target: PointerTarget, pos: Vec2) -> InputResult {
        let card_id = target.card_id;
        let Some(state) = self.store.get(card_id).map(|c| c.state) else {
            trace!(card_id, "pointer down on unknown card");
            return InputResult::Unhandled;
        };

        match target.region {
            CardRegion::CloseButton => {
                self.on_close(card_id);
                return InputResult::Handled;
            }
            CardRegion::MinimizeButton => {
                if state == CardState::Minimized {
                    self.on_restore(card_id);
                } else {
                    self.on_minimize(card_id);
                }
                return InputResult::Handled;
            }
            CardRegion::MaximizeButton => {
                self.on_maximize(card_id);
                return InputResult::Handled;
            }
            _ => {}
        }

        // Tray cards come back on any press; no drag starts from the tray
        if state == CardState::Minimized {
            self.on_focus(card_id);
            return InputResult::Handled;
        }

        self.on_focus(card_id);

        if target.element.is_interactive() {
            return self.forward(card_id, pos);
        }

        match target.region {
            CardRegion::TitleBar => self.handle_title_bar_press(card_id, state, pos),
            CardRegion::Content => self.handle_content_press(card_id, state, pos),
            CardRegion::Resize(handle) => self.handle_resize_press(card_id, state, handle, pos),
            _ => InputResult::Unhandled,
        }
    }

    /// Press on the header starts a move
    fn handle_title_bar_press(&mut self, card_id: CardId, state: CardState, pos: Vec2) -> InputResult {
        if state == CardState::Maximized {
            return InputResult::Handled;
        }
        if let Some(card) = self.store.get(card_id) {
            self.input.start_move(card_id, pos - card.position);
        }
        InputResult::Handled
    }

    /// Press on the body moves the card unless the body handles its own input
    fn handle_content_press(&mut self, card_id: CardId, state: CardState, pos: Vec2) -> InputResult {
        let Some(card) = self.store.get(card_id) else {
            return InputResult::Unhandled;
        };
        if card.content_interactive {
            return self.forward(card_id, pos);
        }
        if state == CardState::Normal {
            self.input.start_move(card_id, pos - card.position);
        }
        InputResult::Handled
    }

    /// Press on a resize handle records the start geometry
    fn handle_resize_press(
        &mut self,
        card_id: CardId,
        state: CardState,
        handle: ResizeHandle,
        pos: Vec2,
    ) -> InputResult {
        if state != CardState::Normal {
            return InputResult::Handled;
        }
        if let Some(card) = self.store.get(card_id) {
            self.input
                .start_resize(card_id, handle, card.position, card.dimensions, pos);
        }
        InputResult::Handled
    }

    fn forward(&self, card_id: CardId, pos: Vec2) -> InputResult {
        match self.store.get(card_id) {
            Some(card) => {
                let local = pos - card.position;
                InputResult::Forward {
                    card_id,
                    local_x: local.x,
                    local_y: local.y,
                }
            }
            None => InputResult::Unhandled,
        }
    }

    /// Start a resize from a handle named `"n"`..`"sw"`
    pub fn start_resize_drag(&mut self, card_id: CardId, direction: &str, x: f32, y: f32) -> InputResult {
        match ResizeHandle::parse(direction) {
            Some(handle) => self.on_pointer_down(
                PointerTarget::chrome(card_id, CardRegion::Resize(handle)),
                Vec2::new(x, y),
            ),
            None => InputResult::Unhandled,
        }
    }

    /// Handle pointer move: commits the in-flight drag or resize
    pub fn handle_pointer_move(&mut self, x: f32, y: f32) -> InputResult {
        let pos = Vec2::new(x, y);
        let Some(drag) = self.input.drag_state().cloned() else {
            return InputResult::Unhandled;
        };

        let card_id = drag.card_id();
        let bounds = match self.store.get(card_id) {
            Some(card) if card.state == CardState::Normal => card.constraints.resolve(),
            _ => {
                warn!(card_id, "dropping stale interaction");
                self.input.end();
                return InputResult::Unhandled;
            }
        };

        match drag {
            DragState::MoveCard { offset, .. } => {
                self.store.update_geometry(card_id, Some(pos - offset), None);
            }
            DragState::ResizeCard {
                handle,
                start_pos,
                start_size,
                start_pointer,
                ..
            } => {
                let (position, dimensions) = calculate_resize(
                    handle,
                    start_pos,
                    start_size,
                    pos - start_pointer,
                    &bounds,
                    self.store.viewport(),
                );
                self.store
                    .update_geometry(card_id, Some(position), Some(dimensions));
            }
        }
        InputResult::Handled
    }

    /// Handle pointer up: the interaction ends where it is
    pub fn handle_pointer_up(&mut self) -> InputResult {
        match self.input.end() {
            Some(_) => InputResult::Handled,
            None => InputResult::Unhandled,
        }
    }

    /// Pointer capture was lost mid-interaction
    pub fn handle_pointer_cancel(&mut self) -> InputResult {
        self.handle_pointer_up()
    }

    /// Escape closes an open dropdown first, then ends any interaction
    pub fn handle_escape(&mut self) -> InputResult {
        if self.dropdown.close() {
            return InputResult::Handled;
        }
        self.handle_pointer_up()
    }

    /// Double-click on a header toggles maximize
    pub fn handle_title_double_click(&mut self, card_id: CardId) -> InputResult {
        if !self.store.contains(card_id) {
            return InputResult::Unhandled;
        }
        self.input.forget(card_id);
        self.on_maximize(card_id);
        InputResult::Handled
    }

    // =========================================================================
    // Dropdowns
    // =========================================================================

    /// Open a dropdown at `anchor` above every card
    pub fn open_dropdown(
        &mut self,
        anchor: AnchorId,
        size: Size,
        geometry: &impl ViewportGeometry,
    ) -> Option<DropdownPlacement> {
        self.dropdown.open(anchor, size, geometry)
    }

    /// Z-index of the open dropdown.
    ///
    /// Read from the allocator on every call since band widening moves the
    /// dropdown band up.
    pub fn dropdown_z_index(&self) -> Option<u32> {
        self.dropdown
            .is_open()
            .then(|| self.store.allocator().dropdown_z())
    }

    /// Keep the open dropdown attached after a scroll or resize
    pub fn reposition_dropdown(&mut self, geometry: &impl ViewportGeometry) -> Option<DropdownPlacement> {
        self.dropdown.reposition(geometry)
    }

    /// Page-level pointer down; closes the dropdown on outside presses
    pub fn dropdown_pointer_down(&mut self, x: f32, y: f32, geometry: &impl ViewportGeometry) -> bool {
        self.dropdown.on_pointer_down(Vec2::new(x, y), geometry)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{engine, open};
    use super::*;
    use crate::input::ElementKind;

    #[test]
    fn test_title_bar_drag() {
        let mut engine = engine();
        let id = open(&mut engine, 100.0, 100.0);

        assert_eq!(engine.handle_pointer_down(200.0, 116.0), InputResult::Handled);
        assert!(engine.input.is_dragging());

        engine.handle_pointer_move(300.0, 216.0);
        assert_eq!(engine.card(id).unwrap().position, Vec2::new(200.0, 200.0));

        assert_eq!(engine.handle_pointer_up(), InputResult::Handled);
        assert!(!engine.input.is_dragging());
    }

    #[test]
    fn test_drag_far_outside_is_clamped() {
        let mut engine = engine();
        let id = open(&mut engine, 100.0, 100.0);

        engine.handle_pointer_down(200.0, 116.0);
        engine.handle_pointer_move(-5000.0, -5000.0);
        assert_eq!(engine.card(id).unwrap().position, Vec2::new(0.0, 64.0));
        engine.handle_pointer_move(9000.0, 9000.0);
        assert_eq!(engine.card(id).unwrap().position, Vec2::new(800.0, 452.0));
    }

    #[test]
    fn test_nw_resize() {
        let mut engine = engine();
        let id = open(&mut engine, 100.0, 100.0);

        engine.start_resize_drag(id, "nw", 100.0, 100.0);
        engine.handle_pointer_move(80.0, 80.0);

        let card = engine.card(id).unwrap();
        assert_eq!(card.position, Vec2::new(80.0, 80.0));
        assert_eq!(card.dimensions, Size::new(420.0, 320.0));
    }

    #[test]
    fn test_interactive_element_never_drags() {
        let mut engine = engine();
        let id = open(&mut engine, 100.0, 100.0);

        let result = engine.on_pointer_down(
            PointerTarget::control(id, ElementKind::Input),
            Vec2::new(150.0, 200.0),
        );
        assert_eq!(
            result,
            InputResult::Forward {
                card_id: id,
                local_x: 50.0,
                local_y: 100.0
            }
        );
        assert!(!engine.input.is_dragging());
    }

    #[test]
    fn test_press_on_tray_card_expands_without_drag() {
        let mut engine = engine();
        let id = open(&mut engine, 100.0, 100.0);
        engine.on_minimize(id);

        let result = engine.on_pointer_down(
            PointerTarget::chrome(id, CardRegion::TitleBar),
            Vec2::new(30.0, 710.0),
        );
        assert_eq!(result, InputResult::Handled);
        assert!(!engine.input.is_dragging());
        assert_eq!(engine.card(id).unwrap().position, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_maximized_card_focuses_only() {
        let mut engine = engine();
        let id = open(&mut engine, 100.0, 100.0);
        engine.on_maximize(id);

        engine.on_pointer_down(
            PointerTarget::chrome(id, CardRegion::TitleBar),
            Vec2::new(300.0, 80.0),
        );
        assert!(!engine.input.is_dragging());
        engine.on_pointer_down(
            PointerTarget::chrome(id, CardRegion::Resize(ResizeHandle::SE)),
            Vec2::new(1195.0, 750.0),
        );
        assert!(!engine.input.is_dragging());
    }

    #[test]
    fn test_close_mid_drag_drops_interaction() {
        let mut engine = engine();
        let id = open(&mut engine, 100.0, 100.0);
        engine.handle_pointer_down(200.0, 116.0);
        engine.on_close(id);

        assert!(!engine.input.is_dragging());
        assert_eq!(engine.handle_pointer_move(300.0, 300.0), InputResult::Unhandled);
    }

    #[test]
    fn test_stale_drag_is_dropped_on_move() {
        let mut engine = engine();
        let id = open(&mut engine, 100.0, 100.0);
        engine.handle_pointer_down(200.0, 116.0);
        // Removed behind the engine's back
        engine.store.remove_card(id);

        assert_eq!(engine.handle_pointer_move(300.0, 300.0), InputResult::Unhandled);
        assert!(!engine.input.is_dragging());
    }

    #[test]
    fn test_escape_ends_without_revert() {
        let mut engine = engine();
        let id = open(&mut engine, 100.0, 100.0);
        engine.handle_pointer_down(200.0, 116.0);
        engine.handle_pointer_move(250.0, 116.0);

        assert_eq!(engine.handle_escape(), InputResult::Handled);
        assert_eq!(engine.card(id).unwrap().position, Vec2::new(150.0, 100.0));
    }

    #[test]
    fn test_double_click_toggles_maximize() {
        let mut engine = engine();
        let id = open(&mut engine, 100.0, 100.0);
        engine.handle_title_double_click(id);
        assert!(engine.card(id).unwrap().is_maximized());
        engine.handle_title_double_click(id);
        assert_eq!(engine.card(id).unwrap().position, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_buttons() {
        let mut engine = engine();
        let id = open(&mut engine, 100.0, 100.0);
        let rect = engine.card(id).unwrap().minimize_button_rect();

        engine.handle_pointer_down(rect.x + 2.0, rect.y + 2.0);
        assert!(engine.card(id).unwrap().is_minimized());
    }
}
