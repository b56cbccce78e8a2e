//! Card creation request

use serde::{Deserialize, Serialize};

use crate::math::{Size, Vec2};
use super::{CardKind, GroupKeys, SizeConstraints};

/// Request to open a new card
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardConfig {
    pub kind: CardKind,
    /// Header title (None = derived from `kind`)
    #[serde(default)]
    pub title: Option<String>,
    /// Initial position (None = auto-cascade)
    #[serde(default)]
    pub position: Option<Vec2>,
    /// Initial size (None = constraint default)
    #[serde(default)]
    pub size: Option<Size>,
    /// Size bounds (None = engine defaults)
    #[serde(default)]
    pub constraints: Option<SizeConstraints>,
    #[serde(default)]
    pub group_keys: GroupKeys,
    /// Opaque domain payload handed to the renderer
    #[serde(default)]
    pub initial_data: serde_json::Value,
    #[serde(default)]
    pub active_tab: Option<String>,
    #[serde(default)]
    pub content_interactive: bool,
}

impl CardConfig {
    /// Request with everything but the kind left to defaults
    pub fn new(kind: CardKind) -> Self {
        Self {
            kind,
            title: None,
            position: None,
            size: None,
            constraints: None,
            group_keys: GroupKeys::default(),
            initial_data: serde_json::Value::Null,
            active_tab: None,
            content_interactive: false,
        }
    }

    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_constraints(mut self, constraints: SizeConstraints) -> Self {
        self.constraints = Some(constraints);
        self
    }

    pub fn with_group_keys(mut self, group_keys: GroupKeys) -> Self {
        self.group_keys = group_keys;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.initial_data = data;
        self
    }
}
