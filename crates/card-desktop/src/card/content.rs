//! Opaque card payload

use serde::{Deserialize, Serialize};

/// Domain data rendered inside a card.
///
/// The engine never looks inside `payload`; it only tracks whether the
/// renderer managed to display it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CardContent {
    pub payload: serde_json::Value,
    pub status: ContentStatus,
}

/// Render health of a card's content
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ContentStatus {
    #[default]
    Ready,
    /// The renderer failed; show the fallback panel for this card only
    Failed { reason: String },
}

impl CardContent {
    pub fn new(payload: serde_json::Value) -> Self {
        Self {
            payload,
            status: ContentStatus::Ready,
        }
    }

    /// Check if the fallback panel should be shown
    #[inline]
    pub fn is_failed(&self) -> bool {
        matches!(self.status, ContentStatus::Failed { .. })
    }
}
