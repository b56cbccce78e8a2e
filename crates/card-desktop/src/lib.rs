//! Card window management for the patient record desktop
//!
//! Clinical records (appointments, lab results, messages, prescriptions,
//! diagnoses, SOAP notes) open as floating cards over the patient view. This
//! crate owns their geometry and stacking:
//! - Card store (open, close, move, resize, focus)
//! - Drag and resize state machine with viewport and size clamping
//! - Z-index bands (tray, normal, expanded, maximized, chrome, dropdowns)
//! - Minimize to tray, maximize, restore
//! - Grid tiling and group stacking
//! - Dropdown positioning
//!
//! ## Architecture
//!
//! - [`math`]: Geometry primitives (`Vec2`, `Size`, `Rect`)
//! - [`card`]: Card model, constraints, chrome regions, group keys
//! - [`zindex`]: Banded z-index allocation
//! - [`store`]: The single write path for card state
//! - [`input`]: Drag/resize state and resize math
//! - [`layout`]: Tiling and group stacking plans
//! - [`dropdown`]: Menu placement next to a trigger
//! - [`events`]: Outbound notifications
//! - [`config`]: TOML-loadable tuning constants
//!
//! ## Example
//!
//! ```rust
//! use card_desktop::{CardConfig, CardEngine, CardKind, EngineConfig, Size, Vec2};
//!
//! let mut engine = CardEngine::new(EngineConfig::default());
//! engine.init(1280.0, 800.0);
//!
//! let id = engine.open_card(
//!     CardConfig::new(CardKind::LabResult)
//!         .with_position(Vec2::new(120.0, 100.0))
//!         .with_size(Size::new(480.0, 360.0)),
//! );
//! engine.on_minimize(id);
//! assert_eq!(engine.status().minimized, 1);
//! ```
//!
//! ## Design Principles
//!
//! 1. **Single writer**: all mutation goes through the engine and its store
//! 2. **Clamp, don't fail**: bad geometry is corrected, unknown ids are ignored
//! 3. **Opaque content**: card payloads pass through untouched
//! 4. **Pure layouts**: tiling, stacking and dropdown placement are functions

pub mod card;
pub mod config;
pub mod dropdown;
pub mod error;
pub mod events;
pub mod input;
pub mod layout;
pub mod math;
pub mod store;
pub mod zindex;

mod engine;
mod viewport;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use card::{
    Card, CardConfig, CardId, CardKind, CardRegion, CardState, GroupBy, GroupKeys, Priority,
    ResizeHandle, SizeConstraints,
};
pub use config::EngineConfig;
pub use dropdown::{AnchorId, DropdownPlacement, ViewportGeometry};
pub use engine::{CardEngine, EngineCommand};
pub use error::{ConfigError, InvariantViolation};
pub use events::{CardStatus, EngineEvent};
pub use input::{InputResult, PointerTarget};
pub use math::{Rect, Size, Vec2};
pub use store::CardStore;
pub use viewport::Viewport;
pub use zindex::Band;
