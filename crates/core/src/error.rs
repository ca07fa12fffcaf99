//! Error types for stowage.

use thiserror::Error;

/// Result type alias for stowage operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by caller-side validation.
///
/// The packing entry points themselves never fail: an item that cannot be
/// placed is reported through the result's `unplaced` list, not as an error.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid item definition.
    #[error("Invalid item: {0}")]
    InvalidItem(String),

    /// Two items in one request share an id.
    #[error("Duplicate item id: {0}")]
    DuplicateItem(String),

    /// Invalid grid capacity.
    #[error("Invalid capacity: {0}")]
    InvalidCapacity(String),
}
