//! # Stowage
//!
//! Cargo grid packing engine for inventory layouts.
//!
//! This crate provides algorithms for:
//! - **Grid packing**: Assigning each item one connected block of cells
//! - **Incremental repacking**: Keeping survivors in place across add/remove calls
//!
//! ## Quick Start
//!
//! ```rust
//! use stowage::{pack, Item};
//!
//! let items = vec![
//!     Item::new("rations", 4),
//!     Item::new("medkit", 2).with_position(2, 0),
//! ];
//!
//! let result = pack(&items, 16, None);
//! assert!(result.all_placed());
//!
//! // Feed the grid back in to keep placements stable next time.
//! let next = pack(&items, 16, Some(&result.grid));
//! assert_eq!(next.grid, result.grid);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialization support

/// Core data model.
pub use stowage_core as core;

/// Packing algorithms.
pub use stowage_grid as grid;

// Re-export commonly used types at root level
pub use stowage_core::{
    validate_request, Cell, CellBorders, CellPos, Error, GridDims, Item, ItemId, PackResult,
    PackStrategy, PackedGrid, Result,
};
pub use stowage_grid::{best_shape, full_repack, pack, GridStore, Shape};
