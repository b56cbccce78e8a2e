//! Card model
//!
//! A card is one floating window: geometry, stacking order, mode and the
//! opaque clinical payload it renders.

#[allow(clippy::module_inception)]
mod card;
mod chrome;
mod config;
mod constraints;
mod content;
mod group;
mod region;

pub use card::{Card, CardKind, CardState, GeometrySnapshot};
#[cfg(test)]
pub(crate) use card::test_support;
pub use chrome::{ChromeStyle, CHROME};
pub use config::CardConfig;
pub use constraints::{SizeBounds, SizeConstraints};
pub use content::{CardContent, ContentStatus};
pub use group::{GroupBy, GroupKey, GroupKeys, Priority};
pub use region::{CardRegion, ResizeHandle};

/// Unique card identifier, never reused within a session
pub type CardId = u64;
