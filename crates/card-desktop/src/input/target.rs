//! What the pointer went down on

use serde::{Deserialize, Serialize};

use crate::card::{CardId, CardRegion};

/// Kind of DOM element under the pointer, as reported by the renderer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// Frame, header or static body content
    #[default]
    Chrome,
    Button,
    Input,
    /// Any other focusable control (links, selects, tab headers)
    Focusable,
}

impl ElementKind {
    /// Interactive elements keep the pointer; they never start a drag
    #[inline]
    pub fn is_interactive(self) -> bool {
        !matches!(self, ElementKind::Chrome)
    }
}

/// Resolved target of a pointer-down
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointerTarget {
    pub card_id: CardId,
    pub region: CardRegion,
    #[serde(default)]
    pub element: ElementKind,
}

impl PointerTarget {
    /// Target on non-interactive chrome
    pub fn chrome(card_id: CardId, region: CardRegion) -> Self {
        Self {
            card_id,
            region,
            element: ElementKind::Chrome,
        }
    }

    /// Target on an interactive element inside the card body
    pub fn control(card_id: CardId, element: ElementKind) -> Self {
        Self {
            card_id,
            region: CardRegion::Content,
            element,
        }
    }
}
