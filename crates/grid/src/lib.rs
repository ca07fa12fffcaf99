//! # Stowage Grid
//!
//! Connected-region packing for fixed-capacity cargo grids.
//!
//! Given a list of inventory items (each occupying `amount` cells) and a
//! bay capacity, the engine assigns every item one 4-connected region so
//! it renders as a single contiguous block, keeps placements stable across
//! incremental add/remove calls, and honors optional placement hints.
//! Packing is heuristic and never fails: items that cannot be placed are
//! dropped from the grid and reported.
//!
//! ## Core Components
//!
//! - **Shape selection**: `best_shape` picks the preferred rectangular footprint
//! - **Region search**: `find_region`, `find_region_with_anchor` locate empty connected blocks
//! - **Annotation**: `special_cells` marks each region's label and control cells
//! - **Packing**: `pack` preserves survivors and escalates to `full_repack` when needed
//! - **Slots**: `GridStore` carries per-bay previous grids between calls
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod annotate;
pub mod packer;
pub mod region;
pub mod shape;
pub mod store;

// Re-exports
pub use annotate::{special_cells, SpecialCells};
pub use packer::{full_repack, pack};
pub use region::{find_rect_region, find_region, find_region_with_anchor, region_is_connected};
pub use shape::{best_shape, Shape};
pub use store::GridStore;
