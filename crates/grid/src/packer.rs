//! Incremental and full grid packing.
//!
//! [`pack`] is the entry point: it preserves surviving placements from the
//! previous grid, places newcomers into the gaps, and escalates to
//! [`full_repack`] the moment any newcomer cannot be placed. The full
//! repack starts from a clean grid and is the only path that drops items;
//! a dropped item is logged and reported, never an error.

use std::collections::{HashMap, HashSet};

use stowage_core::{Item, ItemId, PackResult, PackStrategy, PackedGrid};

use crate::annotate::special_cells;
use crate::region::{find_region, find_region_with_anchor, region_is_connected};
use crate::shape::best_shape;

/// Packs `items` into a grid of `capacity` cells.
///
/// With a previous grid, placements of items still requested are preserved
/// at their exact indices and only newcomers are placed, in the order
/// given. Any placement failure escalates to [`full_repack`]. Without a
/// previous grid every item is a newcomer, which makes the call equivalent
/// to packing into an empty bay.
pub fn pack(items: &[Item], capacity: usize, previous: Option<&PackedGrid>) -> PackResult {
    let mut grid = PackedGrid::empty(capacity);

    if let Some(prev) = previous {
        restore_surviving(&mut grid, prev, items);
    }
    let preserved: HashSet<ItemId> = grid.item_ids().into_iter().cloned().collect();

    for item in items {
        if preserved.contains(&item.id) {
            continue;
        }
        if place_item(&mut grid, item).is_none() {
            log::debug!(
                "no room for item '{}' ({} cells) while preserving the previous layout; repacking from scratch",
                item.id,
                item.amount
            );
            return full_repack(items, capacity);
        }
    }

    PackResult {
        grid,
        unplaced: Vec::new(),
        strategy: PackStrategy::Incremental,
    }
}

/// Clears the grid and places every item from scratch.
///
/// Hinted items go first, keeping their relative order, so user-chosen
/// positions win the space they point at; the rest follow in ascending
/// `amount`, letting small items tuck into gaps before large blocks claim
/// the remaining space. Items that still cannot be placed are omitted from
/// the grid and reported in `unplaced`.
pub fn full_repack(items: &[Item], capacity: usize) -> PackResult {
    let mut grid = PackedGrid::empty(capacity);

    let mut order: Vec<&Item> = items.iter().filter(|item| item.position.is_some()).collect();
    let mut rest: Vec<&Item> = items.iter().filter(|item| item.position.is_none()).collect();
    rest.sort_by_key(|item| item.amount);
    order.extend(rest);

    let mut unplaced = Vec::new();
    for item in order {
        if place_item(&mut grid, item).is_none() {
            log::warn!(
                "item '{}' ({} cells) does not fit in a bay of {} cells; dropping it",
                item.id,
                item.amount,
                capacity
            );
            unplaced.push(item.id.clone());
        }
    }

    PackResult {
        grid,
        unplaced,
        strategy: PackStrategy::Full,
    }
}

/// Copies surviving placements verbatim from the previous grid, then clears
/// any survivor whose copied region is no longer a complete connected
/// region. That happens when the capacity band changed between calls: the
/// same flat indices land on different coordinates, or past the new
/// capacity entirely. Cleared items are re-placed by the caller.
fn restore_surviving(grid: &mut PackedGrid, prev: &PackedGrid, items: &[Item]) {
    let requested: HashMap<&str, usize> = items
        .iter()
        .map(|item| (item.id.as_str(), item.amount))
        .collect();

    let shared = prev.capacity().min(grid.capacity());
    for idx in 0..shared {
        if let Some(cell) = prev.cell(idx) {
            let survives = cell
                .item_id
                .as_deref()
                .is_some_and(|id| requested.contains_key(id));
            if survives {
                grid.set_cell(idx, cell.clone());
            }
        }
    }

    // Annotation flags travel with the copied cells; only region size and
    // connectivity are audited here.
    let survivors: Vec<ItemId> = grid.item_ids().into_iter().cloned().collect();
    for id in survivors {
        let region = grid.region_of(&id);
        let amount = requested.get(id.as_str()).copied().unwrap_or(0);
        if region.len() != amount || !region_is_connected(grid, &region) {
            log::debug!(
                "previous cells of item '{}' no longer form a complete region; re-placing it",
                id
            );
            grid.clear_item(&id);
        }
    }
}

/// Places one item and annotates its region. Returns the region, or `None`
/// when no connected region of the right size exists.
fn place_item(grid: &mut PackedGrid, item: &Item) -> Option<Vec<usize>> {
    let shape = best_shape(item.amount, grid.cols());
    let region = item
        .position
        .and_then(|anchor| find_region_with_anchor(grid, item.amount, anchor, Some(shape)))
        .or_else(|| find_region(grid, item.amount, Some(shape)))?;
    commit(grid, &item.id, &region);
    Some(region)
}

/// Writes a region into the grid and marks its label and control cells.
fn commit(grid: &mut PackedGrid, id: &ItemId, region: &[usize]) {
    for &idx in region {
        if let Some(cell) = grid.cell_mut(idx) {
            cell.item_id = Some(id.clone());
            cell.is_center = false;
            cell.is_top_right = false;
        }
    }
    if let Some(special) = special_cells(region, grid.cols()) {
        if let Some(cell) = grid.cell_mut(special.center) {
            cell.is_center = true;
        }
        if let Some(cell) = grid.cell_mut(special.top_right) {
            cell.is_top_right = true;
        }
    }
}
