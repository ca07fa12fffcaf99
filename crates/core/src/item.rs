//! Inventory items and placement hints.

use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Unique identifier for an inventory item.
pub type ItemId = String;

/// A grid coordinate. Row 0 is the top row, column 0 the left column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CellPos {
    /// Row index from the top.
    pub row: usize,
    /// Column index from the left.
    pub col: usize,
}

impl CellPos {
    /// Creates a new position.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// An inventory item to stow in a cargo grid.
///
/// `amount` is the number of cells the item occupies. The optional
/// `position` is a placement hint: the packed region should include that
/// cell, which keeps a user-initiated placement where the user dropped it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Item {
    /// Stable identifier, unique within one request.
    pub id: ItemId,
    /// Number of cells occupied (at least 1).
    pub amount: usize,
    /// Optional cell the placed region should include.
    #[cfg_attr(feature = "serde", serde(default))]
    pub position: Option<CellPos>,
}

impl Item {
    /// Creates an item occupying `amount` cells, with no placement hint.
    pub fn new(id: impl Into<ItemId>, amount: usize) -> Self {
        Self {
            id: id.into(),
            amount,
            position: None,
        }
    }

    /// Sets the placement hint.
    pub fn with_position(mut self, row: usize, col: usize) -> Self {
        self.position = Some(CellPos::new(row, col));
        self
    }

    /// Validates the item definition.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            return Err(Error::InvalidItem("id must be non-empty".to_string()));
        }
        if self.amount == 0 {
            return Err(Error::InvalidItem(format!(
                "item '{}': amount must be at least 1",
                self.id
            )));
        }
        Ok(())
    }
}

/// Validates a pack request before it is handed to the engine.
///
/// The engine assumes well-formed input and never fails; callers that
/// accept untrusted item lists run this first.
pub fn validate_request(items: &[Item], capacity: usize) -> Result<()> {
    if capacity == 0 {
        return Err(Error::InvalidCapacity(
            "capacity must be at least 1".to_string(),
        ));
    }
    let mut seen = HashSet::new();
    for item in items {
        item.validate()?;
        if !seen.insert(item.id.as_str()) {
            return Err(Error::DuplicateItem(item.id.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_new() {
        let item = Item::new("crate-a", 4);
        assert_eq!(item.id, "crate-a");
        assert_eq!(item.amount, 4);
        assert!(item.position.is_none());
    }

    #[test]
    fn test_item_with_position() {
        let item = Item::new("crate-a", 4).with_position(1, 2);
        assert_eq!(item.position, Some(CellPos::new(1, 2)));
    }

    #[test]
    fn test_validate_rejects_zero_amount() {
        assert!(Item::new("crate-a", 0).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_id() {
        assert!(Item::new("", 3).validate().is_err());
    }

    #[test]
    fn test_validate_request_rejects_duplicates() {
        let items = vec![Item::new("a", 2), Item::new("a", 3)];
        let err = validate_request(&items, 16);
        assert!(matches!(err, Err(Error::DuplicateItem(id)) if id == "a"));
    }

    #[test]
    fn test_validate_request_rejects_zero_capacity() {
        assert!(validate_request(&[], 0).is_err());
    }

    #[test]
    fn test_validate_request_accepts_well_formed() {
        let items = vec![Item::new("a", 2), Item::new("b", 3).with_position(0, 0)];
        assert!(validate_request(&items, 16).is_ok());
    }
}
