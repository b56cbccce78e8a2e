//! WASM exports for the card engine
//!
//! This module provides wasm-bindgen exports for the CardEngine, allowing
//! the patient record UI to drive card windows directly. Structured data
//! crosses the boundary as JSON strings.

use tracing::warn;
use wasm_bindgen::prelude::*;

use crate::card::{CardConfig, GroupBy};
use crate::config::EngineConfig;
use crate::dropdown::{AnchorId, MeasuredGeometry};
use crate::engine::{CardEngine, EngineCommand};
use crate::input::PointerTarget;
use crate::math::{Rect, Size, Vec2};

/// Card controller for WASM - wraps CardEngine with a JS-friendly API
#[wasm_bindgen]
pub struct CardDeskController {
    engine: CardEngine,
}

impl Default for CardDeskController {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl CardDeskController {
    /// Create a controller with the default configuration
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            engine: CardEngine::default(),
        }
    }

    /// Create a controller from a TOML configuration document
    #[wasm_bindgen]
    pub fn from_config_toml(source: &str) -> Result<CardDeskController, JsValue> {
        let config =
            EngineConfig::from_toml_str(source).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self {
            engine: CardEngine::new(config),
        })
    }

    // =========================================================================
    // Initialization
    // =========================================================================

    /// Initialize with screen dimensions
    #[wasm_bindgen]
    pub fn init(&mut self, width: f32, height: f32) {
        self.engine.init(width, height);
    }

    /// Resize the viewport
    #[wasm_bindgen]
    pub fn resize(&mut self, width: f32, height: f32) {
        self.engine.set_viewport(width, height);
    }

    // =========================================================================
    // Cards
    // =========================================================================

    /// Open a card from a JSON creation request
    #[wasm_bindgen]
    pub fn open_card(&mut self, request_json: &str) -> Option<u64> {
        match serde_json::from_str::<CardConfig>(request_json) {
            Ok(config) => Some(self.engine.open_card(config)),
            Err(err) => {
                warn!(%err, "rejected card request");
                None
            }
        }
    }

    /// Apply a JSON-encoded command, returning false if it does not parse
    #[wasm_bindgen]
    pub fn apply_command(&mut self, command_json: &str) -> bool {
        match serde_json::from_str::<EngineCommand>(command_json) {
            Ok(command) => {
                self.engine.apply(command);
                true
            }
            Err(err) => {
                warn!(%err, "rejected command");
                false
            }
        }
    }

    #[wasm_bindgen]
    pub fn close_card(&mut self, id: u64) {
        self.engine.on_close(id);
    }

    #[wasm_bindgen]
    pub fn focus_card(&mut self, id: u64) {
        self.engine.on_focus(id);
    }

    #[wasm_bindgen]
    pub fn move_card(&mut self, id: u64, x: f32, y: f32) {
        self.engine.on_drag_to(id, Vec2::new(x, y));
    }

    #[wasm_bindgen]
    pub fn resize_card(&mut self, id: u64, w: f32, h: f32) {
        self.engine.on_resize_to(id, Size::new(w, h));
    }

    #[wasm_bindgen]
    pub fn minimize_card(&mut self, id: u64) {
        self.engine.on_minimize(id);
    }

    /// Toggle maximize
    #[wasm_bindgen]
    pub fn maximize_card(&mut self, id: u64) {
        self.engine.on_maximize(id);
    }

    #[wasm_bindgen]
    pub fn restore_card(&mut self, id: u64) {
        self.engine.on_restore(id);
    }

    #[wasm_bindgen]
    pub fn set_active_tab(&mut self, id: u64, tab: Option<String>) {
        self.engine.set_active_tab(id, tab);
    }

    /// Called by a card's render boundary when its content throws
    #[wasm_bindgen]
    pub fn report_content_failure(&mut self, id: u64, reason: &str) {
        self.engine.report_content_failure(id, reason);
    }

    #[wasm_bindgen]
    pub fn reset_content(&mut self, id: u64) {
        self.engine.reset_content(id);
    }

    // =========================================================================
    // Layout
    // =========================================================================

    #[wasm_bindgen]
    pub fn tile_all(&mut self) {
        self.engine.tile_all();
    }

    #[wasm_bindgen]
    pub fn minimize_all(&mut self) {
        self.engine.minimize_all();
    }

    #[wasm_bindgen]
    pub fn restore_all(&mut self) {
        self.engine.restore_all();
    }

    #[wasm_bindgen]
    pub fn close_all(&mut self) {
        self.engine.close_all();
    }

    /// Stack by `"priority"`, `"type"`, `"provider"`, `"patient"` or `"dueDate"`
    #[wasm_bindgen]
    pub fn stack_by(&mut self, key: &str) -> bool {
        match serde_json::from_value::<GroupBy>(serde_json::Value::String(key.to_string())) {
            Ok(group_by) => {
                self.engine.stack_by(group_by);
                true
            }
            Err(_) => false,
        }
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Pointer down at viewport coordinates (hit tested by the engine)
    #[wasm_bindgen]
    pub fn pointer_down(&mut self, x: f32, y: f32) -> String {
        let result = self.engine.handle_pointer_down(x, y);
        serde_json::to_string(&result).unwrap_or_else(|_| r#"{"type":"unhandled"}"#.to_string())
    }

    /// Pointer down on a target resolved by the renderer (JSON `PointerTarget`)
    #[wasm_bindgen]
    pub fn pointer_down_on(&mut self, target_json: &str, x: f32, y: f32) -> String {
        let Ok(target) = serde_json::from_str::<PointerTarget>(target_json) else {
            return r#"{"type":"unhandled"}"#.to_string();
        };
        let result = self.engine.on_pointer_down(target, Vec2::new(x, y));
        serde_json::to_string(&result).unwrap_or_else(|_| r#"{"type":"unhandled"}"#.to_string())
    }

    #[wasm_bindgen]
    pub fn start_resize_drag(&mut self, id: u64, direction: &str, x: f32, y: f32) {
        self.engine.start_resize_drag(id, direction, x, y);
    }

    #[wasm_bindgen]
    pub fn pointer_move(&mut self, x: f32, y: f32) -> String {
        let result = self.engine.handle_pointer_move(x, y);
        serde_json::to_string(&result).unwrap_or_else(|_| r#"{"type":"unhandled"}"#.to_string())
    }

    #[wasm_bindgen]
    pub fn pointer_up(&mut self) -> String {
        let result = self.engine.handle_pointer_up();
        serde_json::to_string(&result).unwrap_or_else(|_| r#"{"type":"unhandled"}"#.to_string())
    }

    /// Pointer capture lost
    #[wasm_bindgen]
    pub fn pointer_cancel(&mut self) {
        self.engine.handle_pointer_cancel();
    }

    #[wasm_bindgen]
    pub fn escape(&mut self) {
        self.engine.handle_escape();
    }

    #[wasm_bindgen]
    pub fn title_double_click(&mut self, id: u64) {
        self.engine.handle_title_double_click(id);
    }

    // =========================================================================
    // Dropdowns
    // =========================================================================

    /// Open a dropdown next to a measured trigger; returns the placement
    /// as JSON, or `"null"` if the trigger is off screen
    #[wasm_bindgen]
    #[allow(clippy::too_many_arguments)]
    pub fn open_dropdown(
        &mut self,
        anchor: u64,
        trigger_x: f32,
        trigger_y: f32,
        trigger_w: f32,
        trigger_h: f32,
        menu_w: f32,
        menu_h: f32,
    ) -> String {
        let trigger = Rect::new(trigger_x, trigger_y, trigger_w, trigger_h);
        let geometry = self.measured(anchor, Some(trigger));
        let placement = self
            .engine
            .open_dropdown(AnchorId(anchor), Size::new(menu_w, menu_h), &geometry);
        serde_json::to_string(&placement).unwrap_or_else(|_| "null".to_string())
    }

    /// Re-measure after scroll/resize; pass a negative width if the trigger
    /// is gone
    #[wasm_bindgen]
    pub fn reposition_dropdown(
        &mut self,
        trigger_x: f32,
        trigger_y: f32,
        trigger_w: f32,
        trigger_h: f32,
    ) -> String {
        let Some(current) = self.engine.dropdown.current().copied() else {
            return "null".to_string();
        };
        let rect = (trigger_w >= 0.0).then(|| Rect::new(trigger_x, trigger_y, trigger_w, trigger_h));
        let geometry = self.measured(current.anchor.0, rect);
        let placement = self.engine.reposition_dropdown(&geometry);
        serde_json::to_string(&placement).unwrap_or_else(|_| "null".to_string())
    }

    /// Returns true if the press closed the dropdown
    #[wasm_bindgen]
    pub fn dropdown_pointer_down(
        &mut self,
        x: f32,
        y: f32,
        trigger_x: f32,
        trigger_y: f32,
        trigger_w: f32,
        trigger_h: f32,
    ) -> bool {
        let Some(current) = self.engine.dropdown.current().copied() else {
            return false;
        };
        let geometry = self.measured(
            current.anchor.0,
            Some(Rect::new(trigger_x, trigger_y, trigger_w, trigger_h)),
        );
        self.engine.dropdown_pointer_down(x, y, &geometry)
    }

    #[wasm_bindgen]
    pub fn close_dropdown(&mut self) {
        self.engine.dropdown.close();
    }

    // =========================================================================
    // Outbound
    // =========================================================================

    /// All cards in paint order as JSON
    #[wasm_bindgen]
    pub fn get_cards_json(&self) -> String {
        serde_json::to_string(self.engine.cards()).unwrap_or_else(|_| "[]".to_string())
    }

    /// `{ open, minimized, maximized }` as JSON
    #[wasm_bindgen]
    pub fn get_status_json(&self) -> String {
        serde_json::to_string(&self.engine.status())
            .unwrap_or_else(|_| r#"{"open":0,"minimized":0,"maximized":0}"#.to_string())
    }

    #[wasm_bindgen]
    pub fn get_focused_card(&self) -> Option<u64> {
        self.engine.focused()
    }

    /// Open dropdown as JSON (`null` when closed)
    #[wasm_bindgen]
    pub fn get_dropdown_json(&self) -> String {
        let z_index = self.engine.dropdown_z_index();
        let json = self.engine.dropdown.current().map(|d| {
            serde_json::json!({
                "anchor": d.anchor.0,
                "placement": d.placement,
                "size": d.size,
                "zIndex": z_index
            })
        });
        serde_json::to_string(&json).unwrap_or_else(|_| "null".to_string())
    }

    /// Events queued since the last call, as a JSON array
    #[wasm_bindgen]
    pub fn drain_events_json(&mut self) -> String {
        serde_json::to_string(&self.engine.drain_events()).unwrap_or_else(|_| "[]".to_string())
    }
}

impl CardDeskController {
    fn measured(&self, anchor: u64, anchor_rect: Option<Rect>) -> MeasuredGeometry {
        let size = self.engine.viewport().size;
        MeasuredGeometry {
            viewport: Rect::new(0.0, 0.0, size.width, size.height),
            anchor: AnchorId(anchor),
            anchor_rect,
        }
    }
}
