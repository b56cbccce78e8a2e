//! Monotonic, banded z-index counters

use tracing::warn;

use crate::config::ZBandConfig;
use super::Band;

/// Upward shift of every band above an exhausted one.
///
/// Cards holding a z-index `>= from` must add `delta` to stay in their band.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BandShift {
    pub from: u32,
    pub delta: u32,
}

impl BandShift {
    /// Apply the shift to one z-index
    #[inline]
    pub fn apply(&self, z_index: u32) -> u32 {
        if z_index >= self.from {
            z_index.saturating_add(self.delta)
        } else {
            z_index
        }
    }
}

/// Result of an allocation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Allocation {
    /// Allocated value (first value for range reservations)
    pub z_index: u32,
    /// Set when the band had to be widened to fit the allocation
    pub shift: Option<BandShift>,
}

/// Z-index allocator with one monotonically increasing counter per band
#[derive(Clone, Debug)]
pub struct ZIndexAllocator {
    floors: [u32; Band::COUNT],
    next: [u32; Band::COUNT],
    band_width: u32,
}

impl Default for ZIndexAllocator {
    fn default() -> Self {
        Self::new(&ZBandConfig::default())
    }
}

impl ZIndexAllocator {
    /// Create an allocator with evenly sized bands starting at `config.floor`
    pub fn new(config: &ZBandConfig) -> Self {
        let band_width = config.band_width.max(1);
        let mut floors = [0u32; Band::COUNT];
        for (i, floor) in floors.iter_mut().enumerate() {
            *floor = config
                .floor
                .saturating_add(band_width.saturating_mul(i as u32));
        }
        Self {
            floors,
            next: floors,
            band_width,
        }
    }

    /// First value of `band`
    #[inline]
    pub fn floor(&self, band: Band) -> u32 {
        self.floors[band.index()]
    }

    /// First value past the end of `band`
    #[inline]
    pub fn ceiling(&self, band: Band) -> u32 {
        match Band::ALL.get(band.index() + 1) {
            Some(above) => self.floors[above.index()],
            None => u32::MAX,
        }
    }

    /// Next value `allocate(band)` would return, ignoring widening
    #[inline]
    pub fn peek(&self, band: Band) -> u32 {
        self.next[band.index()]
    }

    /// Check if `z_index` belongs to `band`
    #[inline]
    pub fn contains(&self, band: Band, z_index: u32) -> bool {
        z_index >= self.floor(band) && z_index < self.ceiling(band)
    }

    /// Band that `z_index` falls into, if any
    pub fn band_of(&self, z_index: u32) -> Option<Band> {
        Band::ALL
            .iter()
            .rev()
            .copied()
            .find(|band| z_index >= self.floor(*band))
    }

    /// Take the next value of `band`
    pub fn allocate(&mut self, band: Band) -> Allocation {
        self.reserve(band, 1)
    }

    /// Take `count` consecutive values of `band`, returning the first
    pub fn reserve(&mut self, band: Band, count: u32) -> Allocation {
        let i = band.index();
        let shift = self.ensure_room(band, self.next[i].saturating_add(count));
        let z_index = self.next[i];
        self.next[i] = self.next[i].saturating_add(count);
        Allocation { z_index, shift }
    }

    /// Z-index of the minimized card at tray position `stack_index`
    pub fn minimized_slot(&mut self, stack_index: usize) -> Allocation {
        let offset = u32::try_from(stack_index).unwrap_or(u32::MAX);
        let z_index = self.floor(Band::Minimized).saturating_add(offset);
        let shift = self.ensure_room(Band::Minimized, z_index.saturating_add(1));
        Allocation { z_index, shift }
    }

    /// Fixed z-index of the global control bar
    #[inline]
    pub fn control_bar_z(&self) -> u32 {
        self.floor(Band::ControlBar)
    }

    /// Fixed z-index of open floating menus
    #[inline]
    pub fn dropdown_z(&self) -> u32 {
        self.floor(Band::Dropdown)
    }

    /// Widen `band` so values below `end` fit, shifting every band above it
    fn ensure_room(&mut self, band: Band, end: u32) -> Option<BandShift> {
        let ceiling = self.ceiling(band);
        if end <= ceiling {
            return None;
        }

        let needed = end - ceiling;
        let widths = needed.div_ceil(self.band_width).max(1);
        let delta = self.band_width.saturating_mul(widths);
        warn!(
            band = band.name(),
            delta,
            "z-index band exhausted, widening"
        );

        for above in &Band::ALL[band.index() + 1..] {
            let j = above.index();
            self.floors[j] = self.floors[j].saturating_add(delta);
            self.next[j] = self.next[j].saturating_add(delta);
        }

        Some(BandShift { from: ceiling, delta })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_allocator() -> ZIndexAllocator {
        ZIndexAllocator::new(&ZBandConfig {
            floor: 10,
            band_width: 4,
        })
    }

    #[test]
    fn test_bands_are_strictly_ordered() {
        let alloc = ZIndexAllocator::default();
        for pair in Band::ALL.windows(2) {
            assert!(alloc.ceiling(pair[0]) <= alloc.floor(pair[1]));
            assert!(alloc.floor(pair[0]) < alloc.floor(pair[1]));
        }
        assert!(alloc.dropdown_z() > alloc.control_bar_z());
        assert!(alloc.control_bar_z() >= alloc.ceiling(Band::Maximized));
    }

    #[test]
    fn test_allocate_is_monotonic() {
        let mut alloc = ZIndexAllocator::default();
        let a = alloc.allocate(Band::Focused).z_index;
        let b = alloc.allocate(Band::Focused).z_index;
        let c = alloc.allocate(Band::Focused).z_index;
        assert!(a < b && b < c);
        assert!(alloc.contains(Band::Focused, c));
    }

    #[test]
    fn test_minimized_slot_indexing() {
        let mut alloc = ZIndexAllocator::default();
        let floor = alloc.floor(Band::Minimized);
        assert_eq!(alloc.minimized_slot(0).z_index, floor);
        assert_eq!(alloc.minimized_slot(2).z_index, floor + 2);
        assert!(alloc.minimized_slot(2).z_index < alloc.floor(Band::Base));
    }

    #[test]
    fn test_reserve_returns_first_of_range() {
        let mut alloc = ZIndexAllocator::default();
        let first = alloc.reserve(Band::Base, 3).z_index;
        assert_eq!(first, alloc.floor(Band::Base));
        assert_eq!(alloc.peek(Band::Base), first + 3);
    }

    #[test]
    fn test_exhausted_band_widens_instead_of_colliding() {
        let mut alloc = small_allocator();
        let expanded_floor = alloc.floor(Band::Expanded);

        let mut seen = Vec::new();
        let mut shifts = Vec::new();
        for _ in 0..6 {
            let allocation = alloc.allocate(Band::Focused);
            seen.push(allocation.z_index);
            if let Some(shift) = allocation.shift {
                shifts.push(shift);
            }
        }

        assert_eq!(shifts.len(), 1);
        assert_eq!(shifts[0].from, expanded_floor);
        assert!(alloc.floor(Band::Expanded) > *seen.last().unwrap());
        // Values stay strictly increasing across the widening
        assert!(seen.windows(2).all(|w| w[0] < w[1]));
        // Existing expanded values move with their band
        assert!(alloc.contains(Band::Expanded, shifts[0].apply(expanded_floor)));
    }

    #[test]
    fn test_minimized_overflow_widens() {
        let mut alloc = small_allocator();
        let base_floor = alloc.floor(Band::Base);
        let allocation = alloc.minimized_slot(9);
        assert!(allocation.shift.is_some());
        assert!(allocation.z_index < alloc.floor(Band::Base));
        assert!(alloc.floor(Band::Base) > base_floor);
    }

    #[test]
    fn test_band_of() {
        let alloc = ZIndexAllocator::default();
        assert_eq!(alloc.band_of(alloc.floor(Band::Maximized)), Some(Band::Maximized));
        assert_eq!(alloc.band_of(alloc.floor(Band::Base) - 1), Some(Band::Minimized));
        assert_eq!(alloc.band_of(0), None);
    }

    #[test]
    fn test_shift_apply() {
        let shift = BandShift { from: 100, delta: 50 };
        assert_eq!(shift.apply(99), 99);
        assert_eq!(shift.apply(100), 150);
    }
}
