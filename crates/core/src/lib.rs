//! # Stowage Core
//!
//! Core data model for the stowage grid packing engine.
//!
//! This crate provides the types exchanged between the packing engine and
//! its callers.
//!
//! ## Core Components
//!
//! - **Items**: `Item`, `ItemId`, `CellPos` describe what the caller wants stowed
//! - **Grids**: `Cell`, `PackedGrid`, `GridDims` describe the packed layout
//! - **Results**: `PackResult`, `PackStrategy` describe one packing call's outcome
//! - **Errors**: `Error`, `Result` for caller-side request validation
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod error;
pub mod grid;
pub mod item;
pub mod result;

// Re-exports
pub use error::{Error, Result};
pub use grid::{Cell, CellBorders, GridDims, PackedGrid};
pub use item::{validate_request, CellPos, Item, ItemId};
pub use result::{PackResult, PackStrategy};
