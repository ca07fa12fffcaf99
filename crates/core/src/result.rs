//! Pack result representation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::grid::PackedGrid;
use crate::item::ItemId;

/// Which packing path produced a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PackStrategy {
    /// Previous placements were preserved and only newcomers placed.
    Incremental,
    /// The grid was rebuilt from scratch.
    Full,
}

/// Result of one packing call.
///
/// Packing never fails: items that fit are placed, items that do not are
/// listed in `unplaced` and omitted from the grid. Equal inputs produce
/// equal results, so two results can be compared directly.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackResult {
    /// The packed grid.
    pub grid: PackedGrid,
    /// Ids of items that could not be placed, in placement-attempt order.
    pub unplaced: Vec<ItemId>,
    /// Path that produced the grid.
    pub strategy: PackStrategy,
}

impl PackResult {
    /// Returns true if every requested item was placed.
    pub fn all_placed(&self) -> bool {
        self.unplaced.is_empty()
    }

    /// Returns the number of distinct items placed in the grid.
    pub fn placed_count(&self) -> usize {
        self.grid.item_ids().len()
    }

    /// Returns the number of items that could not be placed.
    pub fn unplaced_count(&self) -> usize {
        self.unplaced.len()
    }

    /// Occupied fraction of the bay capacity (0.0 - 1.0).
    pub fn utilization(&self) -> f64 {
        if self.grid.capacity() == 0 {
            return 0.0;
        }
        self.grid.occupied_count() as f64 / self.grid.capacity() as f64
    }

    /// Returns utilization as a percentage string.
    pub fn utilization_percent(&self) -> String {
        format!("{:.1}%", self.utilization() * 100.0)
    }
}
