//! Preferred footprint selection.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A rectangular item footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Shape {
    /// Columns spanned.
    pub width: usize,
    /// Rows spanned.
    pub height: usize,
}

impl Shape {
    /// Creates a new footprint.
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Number of cells the footprint covers.
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Perimeter in cell edges. Lower means more compact.
    pub fn perimeter(&self) -> usize {
        2 * (self.width + self.height)
    }
}

/// Picks the preferred footprint for an item of `amount` cells in a grid
/// `max_cols` columns wide.
///
/// Every width from 1 up to `min(amount, max_cols)` that divides `amount`
/// exactly yields an exact `width x amount/width` candidate; the most
/// compact one (minimum perimeter) wins and ties go to the narrower
/// candidate. Should no width divide `amount`, the fallback is a
/// near-square `ceil(sqrt(amount))` wide, clamped to `max_cols`; that
/// footprint covers more than `amount` cells and consumers clip the
/// excess.
pub fn best_shape(amount: usize, max_cols: usize) -> Shape {
    let mut best: Option<Shape> = None;
    for width in 1..=amount.min(max_cols) {
        if amount % width != 0 {
            continue;
        }
        let candidate = Shape::new(width, amount / width);
        if best.map_or(true, |b| candidate.perimeter() < b.perimeter()) {
            best = Some(candidate);
        }
    }
    best.unwrap_or_else(|| {
        let width = ((amount as f64).sqrt().ceil() as usize)
            .min(max_cols)
            .max(1);
        Shape::new(width, amount.div_ceil(width))
    })
}
