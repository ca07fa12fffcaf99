//! Previous-grid slots keyed by bay identity.

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use stowage_core::{Item, PackResult, PackedGrid};

use crate::packer::pack;

/// Caller-owned previous-grid slots, one per logical bay.
///
/// The engine keeps no state of its own. A caller that wants visually
/// stable repacking holds one of these, and [`GridStore::pack`] runs the
/// read-pack-store cycle against the named bay's slot: the slot is read as
/// the previous grid, the packed grid is written back afterwards. One
/// writer per bay; the store is a plain value with no internal
/// synchronization, so concurrent callers must serialize access themselves.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridStore {
    grids: HashMap<String, PackedGrid>,
}

impl GridStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Packs a bay, carrying its previous grid in and retaining the new one.
    pub fn pack(&mut self, bay: &str, items: &[Item], capacity: usize) -> PackResult {
        let result = pack(items, capacity, self.grids.get(bay));
        self.grids.insert(bay.to_string(), result.grid.clone());
        result
    }

    /// The retained grid for a bay, if any.
    pub fn get(&self, bay: &str) -> Option<&PackedGrid> {
        self.grids.get(bay)
    }

    /// Seeds or replaces a bay's retained grid.
    pub fn insert(&mut self, bay: impl Into<String>, grid: PackedGrid) {
        self.grids.insert(bay.into(), grid);
    }

    /// Drops a bay's retained grid, returning it.
    pub fn remove(&mut self, bay: &str) -> Option<PackedGrid> {
        self.grids.remove(bay)
    }

    /// Drops every retained grid.
    pub fn clear(&mut self) {
        self.grids.clear();
    }

    /// Number of bays with a retained grid.
    pub fn len(&self) -> usize {
        self.grids.len()
    }

    /// True when no bay has a retained grid.
    pub fn is_empty(&self) -> bool {
        self.grids.is_empty()
    }

    /// Iterates the bay names with a retained grid, in no particular order.
    pub fn bays(&self) -> impl Iterator<Item = &str> {
        self.grids.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_carries_previous_grid() {
        let mut store = GridStore::new();
        let first = store.pack("cargo-1", &[Item::new("a", 4)], 16);
        let a_cells = first.grid.region_of("a");

        let second = store.pack(
            "cargo-1",
            &[Item::new("a", 4), Item::new("b", 3)],
            16,
        );
        assert_eq!(second.grid.region_of("a"), a_cells);
    }

    #[test]
    fn test_store_isolates_bays() {
        let mut store = GridStore::new();
        store.pack("cargo-1", &[Item::new("a", 4)], 16);
        let other = store.pack("cargo-2", &[Item::new("b", 4)], 16);

        // cargo-2 never saw cargo-1's grid, so 'b' takes the first block.
        assert_eq!(other.grid.region_of("b"), vec![0, 1, 4, 5]);
        assert_eq!(store.len(), 2);
        assert!(store.get("cargo-1").is_some());
        assert!(store.get("cargo-3").is_none());
    }

    #[test]
    fn test_store_remove_and_clear() {
        let mut store = GridStore::new();
        store.pack("cargo-1", &[Item::new("a", 2)], 6);
        assert!(store.remove("cargo-1").is_some());
        assert!(store.is_empty());

        store.pack("cargo-1", &[Item::new("a", 2)], 6);
        store.pack("cargo-2", &[Item::new("b", 2)], 6);
        store.clear();
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_store_forgetting_a_bay_loses_stability() {
        let mut store = GridStore::new();
        store.pack("cargo-1", &[Item::new("a", 2), Item::new("b", 2)], 16);
        store.remove("cargo-1");

        // Without the previous grid 'b' packs as if the bay were fresh.
        let repacked = store.pack("cargo-1", &[Item::new("b", 2)], 16);
        assert_eq!(repacked.grid.region_of("b"), vec![0, 4]);
    }
}
