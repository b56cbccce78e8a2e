//! Open/close lifecycle of the single active dropdown

use tracing::debug;

use crate::config::DropdownConfig;
use crate::math::{Rect, Size, Vec2};
use super::{position_dropdown, AnchorId, DropdownPlacement, ViewportGeometry};

/// The menu currently shown
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OpenDropdown {
    pub anchor: AnchorId,
    pub size: Size,
    pub placement: DropdownPlacement,
}

impl OpenDropdown {
    #[inline]
    pub fn rect(&self) -> Rect {
        self.placement.rect(self.size)
    }
}

/// Tracks at most one open dropdown and keeps it attached to its anchor
#[derive(Debug, Default)]
pub struct DropdownController {
    open: Option<OpenDropdown>,
    config: DropdownConfig,
}

impl DropdownController {
    pub fn new(config: DropdownConfig) -> Self {
        Self { open: None, config }
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    #[inline]
    pub fn current(&self) -> Option<&OpenDropdown> {
        self.open.as_ref()
    }

    /// Open a menu of `size` at `anchor`, replacing any open menu.
    ///
    /// Returns `None` (and stays closed) if the anchor is not mounted or is
    /// scrolled out of the viewport.
    pub fn open(
        &mut self,
        anchor: AnchorId,
        size: Size,
        geometry: &impl ViewportGeometry,
    ) -> Option<DropdownPlacement> {
        self.open = None;
        let placement = self.place(anchor, size, geometry)?;
        self.open = Some(OpenDropdown {
            anchor,
            size,
            placement,
        });
        debug!(anchor = anchor.0, "dropdown opened");
        Some(placement)
    }

    /// Recompute the placement after a scroll or resize.
    ///
    /// Closes the menu if its anchor is gone or has left the viewport.
    pub fn reposition(&mut self, geometry: &impl ViewportGeometry) -> Option<DropdownPlacement> {
        let current = self.open?;
        match self.place(current.anchor, current.size, geometry) {
            Some(placement) => {
                self.open = Some(OpenDropdown {
                    placement,
                    ..current
                });
                Some(placement)
            }
            None => {
                debug!(anchor = current.anchor.0, "dropdown anchor left the viewport");
                self.open = None;
                None
            }
        }
    }

    /// Handle a pointer press anywhere on the page.
    ///
    /// A press outside both the menu and its trigger closes the menu.
    /// Returns true if the menu was closed.
    pub fn on_pointer_down(&mut self, pos: Vec2, geometry: &impl ViewportGeometry) -> bool {
        let Some(current) = self.open else {
            return false;
        };
        let on_anchor = geometry
            .anchor_rect(current.anchor)
            .is_some_and(|r| r.contains(pos));
        if current.rect().contains(pos) || on_anchor {
            return false;
        }
        self.close()
    }

    /// Close the menu, returning true if one was open
    pub fn close(&mut self) -> bool {
        self.open.take().is_some()
    }

    fn place(
        &self,
        anchor: AnchorId,
        size: Size,
        geometry: &impl ViewportGeometry,
    ) -> Option<DropdownPlacement> {
        let viewport = geometry.viewport();
        let trigger = geometry.anchor_rect(anchor)?;
        if !viewport.intersects(&trigger) {
            return None;
        }
        Some(position_dropdown(trigger, size, viewport, &self.config))
    }
}
