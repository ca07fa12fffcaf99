//! Label and control cell selection for placed regions.

/// The two distinguished cells of a placed region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecialCells {
    /// Cell that carries the item label.
    pub center: usize,
    /// Cell that carries the removal control.
    pub top_right: usize,
}

/// Picks the label and control cells for a region in a grid `cols` wide.
///
/// The label goes on the member nearest the region centroid (mean row and
/// column), with the earliest member winning ties. The control goes on the
/// visually top-right member: minimal row, then maximal column. Both exist
/// for any non-empty region; the two may coincide on small regions.
pub fn special_cells(region: &[usize], cols: usize) -> Option<SpecialCells> {
    if region.is_empty() || cols == 0 {
        return None;
    }

    let mut sum_row = 0.0;
    let mut sum_col = 0.0;
    for &idx in region {
        sum_row += (idx / cols) as f64;
        sum_col += (idx % cols) as f64;
    }
    let count = region.len() as f64;
    let centroid_row = sum_row / count;
    let centroid_col = sum_col / count;

    let mut center = region[0];
    let mut center_dist = f64::INFINITY;
    let mut top_right = region[0];
    for &idx in region {
        let row = idx / cols;
        let col = idx % cols;

        // Squared distance orders the same as Euclidean.
        let dr = row as f64 - centroid_row;
        let dc = col as f64 - centroid_col;
        let dist = dr * dr + dc * dc;
        if dist < center_dist {
            center_dist = dist;
            center = idx;
        }

        let tr_row = top_right / cols;
        let tr_col = top_right % cols;
        if row < tr_row || (row == tr_row && col > tr_col) {
            top_right = idx;
        }
    }

    Some(SpecialCells { center, top_right })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_region_center_and_corner() {
        // 2x2 block at rows 0-1, cols 0-1 of a 4-wide grid. The centroid
        // (0.5, 0.5) is equidistant from all four members, so the earliest
        // wins; top-right is row 0, col 1.
        let region = [0, 1, 4, 5];
        let special = special_cells(&region, 4).unwrap();
        assert_eq!(special.center, 0);
        assert_eq!(special.top_right, 1);
    }

    #[test]
    fn test_full_band_region() {
        // Six cells filling a 2x3 grid: centroid (0.5, 1.0) is nearest
        // cells 1 and 4 equally, so cell 1 wins; top-right is index 2.
        let region = [0, 1, 2, 3, 4, 5];
        let special = special_cells(&region, 3).unwrap();
        assert_eq!(special.center, 1);
        assert_eq!(special.top_right, 2);
    }

    #[test]
    fn test_column_region() {
        // Vertical strip 2, 6, 10 in a 4-wide grid: centroid on cell 6.
        let region = [2, 6, 10];
        let special = special_cells(&region, 4).unwrap();
        assert_eq!(special.center, 6);
        assert_eq!(special.top_right, 2);
    }

    #[test]
    fn test_l_shaped_region() {
        // L-shape: (0,0), (1,0), (1,1), (1,2) in a 4-wide grid. Centroid
        // (0.75, 0.75) is nearest (1,1) = index 5; top-right is (0,0).
        let region = [0, 4, 5, 6];
        let special = special_cells(&region, 4).unwrap();
        assert_eq!(special.center, 5);
        assert_eq!(special.top_right, 0);
    }

    #[test]
    fn test_single_cell_region() {
        let special = special_cells(&[7], 4).unwrap();
        assert_eq!(special.center, 7);
        assert_eq!(special.top_right, 7);
    }

    #[test]
    fn test_empty_region() {
        assert_eq!(special_cells(&[], 4), None);
    }
}
