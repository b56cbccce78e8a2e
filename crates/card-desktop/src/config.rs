//! Engine configuration
//!
//! Every pixel constant the engine uses lives here so the hand-tuned values
//! (tray step, cascade offset, reserved bands) can be overridden from a TOML
//! file instead of being baked into the layout code.
//!
//! ```toml
//! [viewport]
//! top_reserve = 64.0
//! bottom_reserve = 48.0
//!
//! [tray]
//! margin_x = 20.0
//! margin_y = 100.0
//! column_offset = 10.0
//! row_offset = 60.0
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::math::{Size, Vec2};

/// Top-level engine configuration
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub viewport: ViewportConfig,
    pub tray: TrayConfig,
    pub layout: LayoutConfig,
    pub z_bands: ZBandConfig,
    pub dropdown: DropdownConfig,
    pub cards: CardDefaults,
}

/// Bands of the viewport reserved for global chrome
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    /// Height reserved at the top (navigation bar)
    pub top_reserve: f32,
    /// Height reserved at the bottom (status bar)
    pub bottom_reserve: f32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            top_reserve: 64.0,
            bottom_reserve: 48.0,
        }
    }
}

/// Placement of minimized cards
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrayConfig {
    pub margin_x: f32,
    /// Distance from the bottom of the viewport to the first tray slot
    pub margin_y: f32,
    /// Horizontal step per stacked card
    pub column_offset: f32,
    /// Vertical step per stacked card (stack grows upwards)
    pub row_offset: f32,
    /// Re-enter the maximized state when restoring a card that was
    /// minimized while maximized
    pub remaximize_on_restore: bool,
}

impl Default for TrayConfig {
    fn default() -> Self {
        Self {
            margin_x: 20.0,
            margin_y: 100.0,
            column_offset: 10.0,
            row_offset: 60.0,
            remaximize_on_restore: false,
        }
    }
}

/// Tiling and group stacking parameters
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Per-member offset inside a stacked group
    pub cascade_offset: f32,
    /// Cell size used when the usable viewport is degenerate
    pub default_card_size: Size,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            cascade_offset: 30.0,
            default_card_size: Size::new(480.0, 360.0),
        }
    }
}

/// Layout of the z-index space
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZBandConfig {
    /// First z-index of the minimized band
    pub floor: u32,
    /// Number of z-index values reserved per band before widening kicks in
    pub band_width: u32,
}

impl Default for ZBandConfig {
    fn default() -> Self {
        Self {
            floor: 100,
            band_width: 1_000,
        }
    }
}

/// Floating menu placement
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropdownConfig {
    /// Gap between trigger and menu
    pub gap: f32,
    /// Minimum distance kept from the viewport edges
    pub margin: f32,
}

impl Default for DropdownConfig {
    fn default() -> Self {
        Self {
            gap: 4.0,
            margin: 8.0,
        }
    }
}

/// Defaults for cards opened without explicit geometry
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardDefaults {
    pub min_size: Size,
    pub max_size: Size,
    pub default_size: Size,
    /// Where the first auto-placed card lands
    pub origin: Vec2,
    /// Offset between consecutively auto-placed cards
    pub cascade_offset: f32,
    /// Number of auto-placed cards before the cascade wraps back to `origin`
    pub cascade_wrap: u32,
}

impl Default for CardDefaults {
    fn default() -> Self {
        Self {
            min_size: Size::new(280.0, 200.0),
            max_size: Size::new(1600.0, 1200.0),
            default_size: Size::new(480.0, 360.0),
            origin: Vec2::new(40.0, 96.0),
            cascade_offset: 30.0,
            cascade_wrap: 8,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Reject values the engine cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("viewport.top_reserve", self.viewport.top_reserve)?;
        non_negative("viewport.bottom_reserve", self.viewport.bottom_reserve)?;
        non_negative("tray.margin_x", self.tray.margin_x)?;
        non_negative("tray.margin_y", self.tray.margin_y)?;
        non_negative("tray.column_offset", self.tray.column_offset)?;
        non_negative("tray.row_offset", self.tray.row_offset)?;
        non_negative("layout.cascade_offset", self.layout.cascade_offset)?;
        non_negative("cards.cascade_offset", self.cards.cascade_offset)?;
        non_negative("dropdown.gap", self.dropdown.gap)?;
        non_negative("dropdown.margin", self.dropdown.margin)?;

        if self.layout.default_card_size.is_empty() {
            return Err(invalid("layout.default_card_size", "must be positive"));
        }
        if self.cards.default_size.is_empty() {
            return Err(invalid("cards.default_size", "must be positive"));
        }
        if self.z_bands.band_width == 0 {
            return Err(invalid("z_bands.band_width", "must be at least 1"));
        }
        let top = u64::from(self.z_bands.floor)
            + u64::from(self.z_bands.band_width) * crate::zindex::Band::COUNT as u64;
        if top > u64::from(u32::MAX / 2) {
            return Err(invalid("z_bands", "band layout leaves no room to widen"));
        }
        Ok(())
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("expected a finite value >= 0, got {value}")))
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}
