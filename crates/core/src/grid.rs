//! Cargo grid representation.
//!
//! A [`PackedGrid`] is a flat, row-major vector of cells whose length is
//! exactly the bay capacity. The rectangle it is rendered into is derived
//! from the capacity via a fixed band table (see [`GridDims::for_capacity`]);
//! when the column count does not divide the capacity, the trailing indices
//! of the last row are permanently blocked rather than padded with extra
//! cells, so capacity stays exact.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::item::{CellPos, ItemId};

/// A single grid cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cell {
    /// Occupying item, or `None` when the cell is empty.
    pub item_id: Option<ItemId>,
    /// True on the one cell per region that carries the item label.
    pub is_center: bool,
    /// True on the one cell per region that carries the removal control.
    pub is_top_right: bool,
}

impl Cell {
    /// An empty cell with both annotation flags cleared.
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when no item occupies this cell.
    pub fn is_empty(&self) -> bool {
        self.item_id.is_none()
    }

    /// True when an item occupies this cell.
    pub fn is_occupied(&self) -> bool {
        self.item_id.is_some()
    }
}

/// Border edges of a cell, for rendering region outlines.
///
/// A side is `true` when the neighbor across it belongs to a different item
/// (or no item), or lies outside the usable grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellBorders {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

/// Rectangle dimensions derived from a bay capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDims {
    /// Number of rows, `ceil(capacity / cols)`.
    pub rows: usize,
    /// Number of columns from the capacity band table.
    pub cols: usize,
}

impl GridDims {
    /// Applies the fixed capacity band table.
    ///
    /// | capacity | columns |
    /// |----------|---------|
    /// | 0..=6    | 3       |
    /// | 7..=16   | 4       |
    /// | 17..=30  | 5       |
    /// | 31..     | 6       |
    pub fn for_capacity(capacity: usize) -> Self {
        let cols = match capacity {
            0..=6 => 3,
            7..=16 => 4,
            17..=30 => 5,
            _ => 6,
        };
        Self {
            rows: capacity.div_ceil(cols),
            cols,
        }
    }

    /// Cells in the full `rows x cols` rectangle, including any blocked tail.
    pub fn rect_cells(&self) -> usize {
        self.rows * self.cols
    }
}

/// A packed cargo grid.
///
/// `cells` holds exactly `capacity` entries in row-major order. Coordinates
/// past the capacity (the blocked tail of the last row) have no cell;
/// [`PackedGrid::index_of`] returns `None` for them, which keeps every
/// search and placement inside the real bay.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackedGrid {
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
}

impl PackedGrid {
    /// Creates an all-empty grid for the given capacity.
    pub fn empty(capacity: usize) -> Self {
        let dims = GridDims::for_capacity(capacity);
        Self {
            cells: vec![Cell::empty(); capacity],
            rows: dims.rows,
            cols: dims.cols,
        }
    }

    /// Number of usable cells. Always equals the capacity the grid was
    /// created with.
    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    /// Number of rows in the rendered rectangle.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns in the rendered rectangle.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The rendered rectangle dimensions.
    pub fn dims(&self) -> GridDims {
        GridDims {
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The cell at a flat index, if the index is within capacity.
    pub fn cell(&self, idx: usize) -> Option<&Cell> {
        self.cells.get(idx)
    }

    /// Mutable access to the cell at a flat index.
    pub fn cell_mut(&mut self, idx: usize) -> Option<&mut Cell> {
        self.cells.get_mut(idx)
    }

    /// Flat index of a coordinate, or `None` when the coordinate is outside
    /// the rectangle or falls in the blocked tail of the last row.
    pub fn index_of(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        let idx = row * self.cols + col;
        (idx < self.cells.len()).then_some(idx)
    }

    /// Coordinate of a flat index.
    pub fn pos_of(&self, idx: usize) -> CellPos {
        CellPos::new(idx / self.cols, idx % self.cols)
    }

    /// The occupying item at a flat index, if any.
    pub fn item_at(&self, idx: usize) -> Option<&ItemId> {
        self.cells.get(idx).and_then(|cell| cell.item_id.as_ref())
    }

    /// True when the index is within capacity and currently empty.
    pub fn is_free(&self, idx: usize) -> bool {
        self.cells.get(idx).is_some_and(Cell::is_empty)
    }

    /// True when any cell is assigned to the item.
    pub fn contains_item(&self, id: &str) -> bool {
        self.cells
            .iter()
            .any(|cell| cell.item_id.as_deref() == Some(id))
    }

    /// Flat indices assigned to an item, in row-major order. Empty when the
    /// item is not in the grid.
    pub fn region_of(&self, id: &str) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.item_id.as_deref() == Some(id))
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Distinct item ids, in order of first appearance.
    pub fn item_ids(&self) -> Vec<&ItemId> {
        let mut ids: Vec<&ItemId> = Vec::new();
        for cell in &self.cells {
            if let Some(id) = &cell.item_id {
                if !ids.contains(&id) {
                    ids.push(id);
                }
            }
        }
        ids
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_occupied()).count()
    }

    /// Number of cells still available for placement.
    pub fn free_count(&self) -> usize {
        self.capacity() - self.occupied_count()
    }

    /// Replaces the cell at a flat index. Returns `false` when the index is
    /// out of range.
    pub fn set_cell(&mut self, idx: usize, cell: Cell) -> bool {
        match self.cells.get_mut(idx) {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }

    /// Clears every cell assigned to an item. Returns the number cleared.
    pub fn clear_item(&mut self, id: &str) -> usize {
        let mut cleared = 0;
        for cell in &mut self.cells {
            if cell.item_id.as_deref() == Some(id) {
                *cell = Cell::empty();
                cleared += 1;
            }
        }
        cleared
    }

    /// Border edges of the cell at a flat index, comparing its item against
    /// each 4-neighbor. Out-of-range indices report no borders.
    pub fn borders(&self, idx: usize) -> CellBorders {
        let Some(cell) = self.cell(idx) else {
            return CellBorders::default();
        };
        let pos = self.pos_of(idx);
        let mine = cell.item_id.as_ref();
        let differs = |row: usize, col: usize| match self.index_of(row, col) {
            Some(neighbor) => self.item_at(neighbor) != mine,
            None => true,
        };
        CellBorders {
            top: pos.row == 0 || differs(pos.row - 1, pos.col),
            right: differs(pos.row, pos.col + 1),
            bottom: differs(pos.row + 1, pos.col),
            left: pos.col == 0 || differs(pos.row, pos.col - 1),
        }
    }
}

impl fmt::Display for PackedGrid {
    /// Renders one row per line. Items become letters in first-appearance
    /// order (uppercase on their label cell), empty cells `.`, blocked tail
    /// cells a space.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids = self.item_ids();
        for row in 0..self.rows {
            for col in 0..self.cols {
                let ch = match self.index_of(row, col).and_then(|idx| self.cell(idx)) {
                    None => ' ',
                    Some(cell) => match &cell.item_id {
                        None => '.',
                        Some(id) => {
                            let ord = ids.iter().position(|known| *known == id).unwrap_or(0);
                            let letter = (b'a' + (ord % 26) as u8) as char;
                            if cell.is_center {
                                letter.to_ascii_uppercase()
                            } else {
                                letter
                            }
                        }
                    },
                };
                write!(f, "{ch}")?;
            }
            if row + 1 < self.rows {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
