//! Card struct and state

use serde::{Deserialize, Serialize};

use crate::math::{Rect, Size, Vec2};
use super::{CardContent, CardId, GroupBy, GroupKey, GroupKeys, SizeConstraints, CHROME};

/// Display mode of a card. Exactly one holds at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardState {
    #[default]
    Normal,
    Minimized,
    Maximized,
}

/// Clinical entity shown by a card
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CardKind {
    Appointment,
    LabResult,
    Message,
    Prescription,
    Diagnosis,
    SoapNote,
}

impl CardKind {
    /// Title used when the request does not provide one
    pub fn label(self) -> &'static str {
        match self {
            CardKind::Appointment => "Appointment",
            CardKind::LabResult => "Lab Result",
            CardKind::Message => "Message",
            CardKind::Prescription => "Prescription",
            CardKind::Diagnosis => "Diagnosis",
            CardKind::SoapNote => "SOAP Note",
        }
    }
}

/// Geometry captured before a minimize or maximize, restored exactly once
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeometrySnapshot {
    pub position: Vec2,
    pub dimensions: Size,
    pub was_maximized: bool,
}

/// A floating card window
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    pub kind: CardKind,
    pub title: String,
    /// Top-left corner in viewport pixels
    pub position: Vec2,
    pub dimensions: Size,
    pub constraints: SizeConstraints,
    /// Higher paints on top
    pub z_index: u32,
    pub state: CardState,
    pub(crate) previous_state: Option<GeometrySnapshot>,
    pub group_keys: GroupKeys,
    pub active_tab: Option<String>,
    pub content: CardContent,
    /// Whether the body handles its own pointer events.
    /// If false, dragging non-interactive parts of the body moves the card.
    pub content_interactive: bool,
}

impl Card {
    #[inline]
    pub fn is_minimized(&self) -> bool {
        self.state == CardState::Minimized
    }

    #[inline]
    pub fn is_maximized(&self) -> bool {
        self.state == CardState::Maximized
    }

    /// Snapshot waiting to be restored, if any
    #[inline]
    pub fn previous_state(&self) -> Option<&GeometrySnapshot> {
        self.previous_state.as_ref()
    }

    /// Group key of this card under `group_by`
    #[inline]
    pub fn group_key(&self, group_by: GroupBy) -> GroupKey {
        self.group_keys.key(group_by)
    }

    /// Bounding rectangle
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.position, self.dimensions)
    }

    pub(crate) fn snapshot(&self) -> GeometrySnapshot {
        GeometrySnapshot {
            position: self.position,
            dimensions: self.dimensions,
            was_maximized: self.is_maximized(),
        }
    }

    /// Header rectangle
    pub fn title_bar_rect(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.dimensions.width,
            CHROME.title_bar_height.min(self.dimensions.height),
        )
    }

    /// Header button `slot`, counted from the right edge (0 = close)
    fn button_rect(&self, slot: f32) -> Rect {
        let x = self.position.x + self.dimensions.width
            - CHROME.button_margin
            - CHROME.button_size * (slot + 1.0)
            - CHROME.button_spacing * slot;
        let y = self.position.y + (CHROME.title_bar_height - CHROME.button_size) / 2.0;
        Rect::new(x, y, CHROME.button_size, CHROME.button_size)
    }

    pub fn close_button_rect(&self) -> Rect {
        self.button_rect(0.0)
    }

    pub fn maximize_button_rect(&self) -> Rect {
        self.button_rect(1.0)
    }

    pub fn minimize_button_rect(&self) -> Rect {
        self.button_rect(2.0)
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::card;
    use super::*;

    #[test]
    fn test_card_rect() {
        let c = card(1, Vec2::new(100.0, 100.0), Size::new(800.0, 600.0));
        let r = c.rect();
        assert!((r.x - 100.0).abs() < 0.001);
        assert!((r.right() - 900.0).abs() < 0.001);
        assert!((r.bottom() - 700.0).abs() < 0.001);
    }

    #[test]
    fn test_buttons_sit_in_title_bar_right_to_left() {
        let c = card(1, Vec2::new(100.0, 100.0), Size::new(800.0, 600.0));
        let bar = c.title_bar_rect();
        let close = c.close_button_rect();
        let maximize = c.maximize_button_rect();
        let minimize = c.minimize_button_rect();

        assert!(bar.contains(close.position()) && close.right() <= bar.right());
        assert!(bar.contains(minimize.position()) && minimize.bottom() <= bar.bottom());
        assert!(close.x > maximize.x);
        assert!(maximize.x > minimize.x);
        assert!(!close.intersects(&maximize));
    }

    #[test]
    fn test_state_flags_are_exclusive() {
        let mut c = card(1, Vec2::ZERO, Size::new(400.0, 300.0));
        assert!(!c.is_minimized() && !c.is_maximized());
        c.state = CardState::Minimized;
        assert!(c.is_minimized() && !c.is_maximized());
        c.state = CardState::Maximized;
        assert!(!c.is_minimized() && c.is_maximized());
    }

    #[test]
    fn test_card_serializes_camel_case() {
        let c = card(7, Vec2::new(1.0, 2.0), Size::new(400.0, 300.0));
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["zIndex"], 1_107);
        assert_eq!(json["state"], "normal");
        assert_eq!(json["kind"], "appointment");
        assert!(json["previousState"].is_null());
    }
}
