//! Region search within a cargo grid.
//!
//! Three searches over the current occupancy: rectangle scanning for
//! preferred footprints, anchored search honoring a placement hint, and a
//! breadth-first flood fill that discovers irregular connected regions when
//! no rectangle fits. Connectivity is 4-neighbor throughout, and the flood
//! fill is iterative with an explicit queue so region size never grows the
//! call stack.

use std::collections::VecDeque;

use stowage_core::{CellPos, PackedGrid};

use crate::shape::Shape;

/// Finds the first all-empty `shape`-sized block, scanning top-left anchors
/// in row-major order. Returned indices are row-major.
pub fn find_rect_region(grid: &PackedGrid, shape: Shape) -> Option<Vec<usize>> {
    let (rows, cols) = (grid.rows(), grid.cols());
    if shape.width == 0 || shape.height == 0 || shape.width > cols || shape.height > rows {
        return None;
    }
    for top in 0..=(rows - shape.height) {
        'anchor: for left in 0..=(cols - shape.width) {
            let mut cells = Vec::with_capacity(shape.cell_count());
            for dy in 0..shape.height {
                for dx in 0..shape.width {
                    match grid.index_of(top + dy, left + dx) {
                        Some(idx) if grid.is_free(idx) => cells.push(idx),
                        _ => continue 'anchor,
                    }
                }
            }
            return Some(cells);
        }
    }
    None
}

/// Finds a connected `target`-cell region that includes `anchor`.
///
/// Fails when the anchor lies outside the usable grid or is already
/// occupied. When `preferred` covers exactly `target` cells, every offset
/// of that rectangle containing the anchor is tried first (row offsets
/// outer, column offsets inner); otherwise, or when no offset fits, a flood
/// fill seeded at the anchor collects the region.
pub fn find_region_with_anchor(
    grid: &PackedGrid,
    target: usize,
    anchor: CellPos,
    preferred: Option<Shape>,
) -> Option<Vec<usize>> {
    let anchor_idx = grid.index_of(anchor.row, anchor.col)?;
    if !grid.is_free(anchor_idx) {
        return None;
    }
    if let Some(shape) = preferred {
        // An oversized fallback footprint would need clipping, which could
        // cut away the anchor itself; only exact footprints are scanned.
        if shape.cell_count() == target {
            if let Some(cells) = anchored_rect(grid, anchor, shape) {
                return Some(cells);
            }
        }
    }
    let mut visited = vec![false; grid.capacity()];
    flood_fill(grid, anchor_idx, target, &mut visited)
}

/// Finds a connected `target`-cell region anywhere in the grid.
///
/// The preferred rectangle is tried first; when it covers more than
/// `target` cells the row-major tail is clipped off, which keeps the rest
/// connected. Failing that, flood fills are seeded from each still
/// unvisited empty cell in index order until one component yields enough
/// cells.
pub fn find_region(
    grid: &PackedGrid,
    target: usize,
    preferred: Option<Shape>,
) -> Option<Vec<usize>> {
    if target == 0 {
        return None;
    }
    if let Some(shape) = preferred {
        if let Some(mut cells) = find_rect_region(grid, shape) {
            if cells.len() >= target {
                cells.truncate(target);
                return Some(cells);
            }
        }
    }
    let mut visited = vec![false; grid.capacity()];
    for seed in 0..grid.capacity() {
        if visited[seed] || !grid.is_free(seed) {
            continue;
        }
        if let Some(cells) = flood_fill(grid, seed, target, &mut visited) {
            return Some(cells);
        }
    }
    None
}

/// True when `cells` form one 4-connected component of the grid.
pub fn region_is_connected(grid: &PackedGrid, cells: &[usize]) -> bool {
    let Some(&first) = cells.first() else {
        return false;
    };
    let capacity = grid.capacity();
    if cells.iter().any(|&idx| idx >= capacity) {
        return false;
    }
    let mut member = vec![false; capacity];
    for &idx in cells {
        member[idx] = true;
    }

    let mut seen = vec![false; capacity];
    let mut queue = VecDeque::from([first]);
    seen[first] = true;
    let mut reached = 0;
    while let Some(idx) = queue.pop_front() {
        reached += 1;
        for (row, col) in neighbor_coords(grid.pos_of(idx)) {
            if let Some(neighbor) = grid.index_of(row, col) {
                if member[neighbor] && !seen[neighbor] {
                    seen[neighbor] = true;
                    queue.push_back(neighbor);
                }
            }
        }
    }
    reached == cells.len()
}

/// Scans every offset of `shape` that covers the anchor, nearest first.
fn anchored_rect(grid: &PackedGrid, anchor: CellPos, shape: Shape) -> Option<Vec<usize>> {
    for dy in 0..shape.height {
        'offset: for dx in 0..shape.width {
            if dy > anchor.row || dx > anchor.col {
                continue;
            }
            let top = anchor.row - dy;
            let left = anchor.col - dx;
            if top + shape.height > grid.rows() || left + shape.width > grid.cols() {
                continue;
            }
            let mut cells = Vec::with_capacity(shape.cell_count());
            for y in 0..shape.height {
                for x in 0..shape.width {
                    match grid.index_of(top + y, left + x) {
                        Some(idx) if grid.is_free(idx) => cells.push(idx),
                        _ => continue 'offset,
                    }
                }
            }
            return Some(cells);
        }
    }
    None
}

/// Iterative breadth-first fill over empty 4-connected cells.
///
/// Collects at most `target` cells starting from `seed`. Every cell touched
/// stays marked in `visited`, including those of a failed attempt, so a
/// caller scanning multiple seeds never walks the same component twice.
fn flood_fill(
    grid: &PackedGrid,
    seed: usize,
    target: usize,
    visited: &mut [bool],
) -> Option<Vec<usize>> {
    if target == 0 || visited[seed] || !grid.is_free(seed) {
        return None;
    }
    let mut collected = Vec::with_capacity(target);
    let mut queue = VecDeque::new();
    visited[seed] = true;
    queue.push_back(seed);
    while let Some(idx) = queue.pop_front() {
        collected.push(idx);
        if collected.len() == target {
            return Some(collected);
        }
        for (row, col) in neighbor_coords(grid.pos_of(idx)) {
            if let Some(neighbor) = grid.index_of(row, col) {
                if !visited[neighbor] && grid.is_free(neighbor) {
                    visited[neighbor] = true;
                    queue.push_back(neighbor);
                }
            }
        }
    }
    None
}

/// 4-neighbors in up, down, left, right order. Row or column 0 wraps to
/// `usize::MAX`, which `index_of` rejects.
fn neighbor_coords(pos: CellPos) -> [(usize, usize); 4] {
    let CellPos { row, col } = pos;
    [
        (row.wrapping_sub(1), col),
        (row + 1, col),
        (row, col.wrapping_sub(1)),
        (row, col + 1),
    ]
}
