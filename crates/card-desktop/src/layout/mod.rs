//! Layout engine
//!
//! Pure arrangement functions. Each takes the participating cards and the
//! viewport and returns a [`LayoutPlan`]; nothing here touches the store.
//! The store applies the plan in one step so a layout command is atomic.
//!
//! - [`tile`]: every card gets its own grid cell ("arrange all")
//! - [`stack_by`]: cards are grouped by a key and each group gets a cell,
//!   members cascading inside it

mod grid;
mod grouping;
mod plan;
mod tiling;

pub use grid::GridSpec;
pub use grouping::{partition, stack_by};
pub use plan::{LayoutPlan, Placement};
pub use tiling::tile;

use crate::card::{Card, SizeBounds};

/// Tightest size bounds shared by every card: the largest minimum and the
/// smallest maximum
pub(crate) fn shared_bounds(cards: &[&Card]) -> Option<SizeBounds> {
    cards
        .iter()
        .map(|card| card.constraints.resolve())
        .reduce(|acc, bounds| acc.tighten(&bounds))
}
