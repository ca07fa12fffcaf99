//! Integration tests for stowage-core.

use stowage_core::{validate_request, Cell, Error, GridDims, Item, PackedGrid};

mod dims_tests {
    use super::*;

    #[test]
    fn test_band_table_boundaries() {
        let expectations = [
            (1, 3),
            (6, 3),
            (7, 4),
            (16, 4),
            (17, 5),
            (30, 5),
            (31, 6),
            (90, 6),
        ];
        for (capacity, cols) in expectations {
            let dims = GridDims::for_capacity(capacity);
            assert_eq!(dims.cols, cols, "capacity {capacity}");
            assert_eq!(dims.rows, capacity.div_ceil(cols), "capacity {capacity}");
        }
    }

    #[test]
    fn test_every_capacity_addresses_exactly_its_cells() {
        for capacity in 1..=40 {
            let grid = PackedGrid::empty(capacity);
            assert_eq!(grid.capacity(), capacity);

            // Every flat index maps to a coordinate and back.
            for idx in 0..capacity {
                let pos = grid.pos_of(idx);
                assert_eq!(grid.index_of(pos.row, pos.col), Some(idx));
            }

            // Coordinates beyond the capacity resolve to nothing, blocked
            // tail included.
            let mut addressable = 0;
            for row in 0..grid.rows() {
                for col in 0..grid.cols() {
                    if grid.index_of(row, col).is_some() {
                        addressable += 1;
                    }
                }
            }
            assert_eq!(addressable, capacity);
            assert_eq!(grid.index_of(grid.rows(), 0), None);
            assert_eq!(grid.index_of(0, grid.cols()), None);
        }
    }
}

mod grid_tests {
    use super::*;

    fn occupied(id: &str) -> Cell {
        Cell {
            item_id: Some(id.to_string()),
            is_center: false,
            is_top_right: false,
        }
    }

    #[test]
    fn test_grid_edit_cycle() {
        let mut grid = PackedGrid::empty(16);
        for idx in [0, 1, 4, 5] {
            assert!(grid.set_cell(idx, occupied("a")));
        }
        for idx in [2, 3] {
            assert!(grid.set_cell(idx, occupied("b")));
        }

        assert_eq!(grid.occupied_count(), 6);
        assert_eq!(grid.free_count(), 10);
        assert_eq!(grid.region_of("a"), vec![0, 1, 4, 5]);
        let ids: Vec<&str> = grid.item_ids().iter().map(|id| id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);

        assert_eq!(grid.clear_item("b"), 2);
        assert!(grid.is_free(2));
        assert!(!grid.contains_item("b"));
        assert_eq!(grid.occupied_count(), 4);
    }

    #[test]
    fn test_borders_outline_a_region() {
        // One 2x2 region in an otherwise empty 4x4 grid. Walking its
        // cells, the outside edges are set and the inside edges are not,
        // which is what gives the renderer a single unbroken outline.
        let mut grid = PackedGrid::empty(16);
        for idx in [5, 6, 9, 10] {
            grid.set_cell(idx, occupied("a"));
        }

        let top_left = grid.borders(5);
        assert!(top_left.top && top_left.left);
        assert!(!top_left.right && !top_left.bottom);

        let bottom_right = grid.borders(10);
        assert!(bottom_right.bottom && bottom_right.right);
        assert!(!bottom_right.top && !bottom_right.left);
    }

    #[test]
    fn test_display_renders_rows() {
        let mut grid = PackedGrid::empty(6);
        for idx in [0, 1, 3, 4] {
            grid.set_cell(idx, occupied("cargo"));
        }
        let mut center = occupied("cargo");
        center.is_center = true;
        grid.set_cell(4, center);

        assert_eq!(format!("{grid}"), "aa.\naA.");
    }
}

mod validation_tests {
    use super::*;

    #[test]
    fn test_accepts_well_formed_requests() {
        let items = vec![
            Item::new("ore", 4),
            Item::new("fuel", 2).with_position(1, 0),
        ];
        assert!(validate_request(&items, 16).is_ok());
    }

    #[test]
    fn test_rejects_each_contract_violation() {
        assert!(matches!(
            validate_request(&[Item::new("", 1)], 6),
            Err(Error::InvalidItem(_))
        ));
        assert!(matches!(
            validate_request(&[Item::new("a", 0)], 6),
            Err(Error::InvalidItem(_))
        ));
        assert!(matches!(
            validate_request(&[Item::new("a", 1), Item::new("a", 2)], 6),
            Err(Error::DuplicateItem(_))
        ));
        assert!(matches!(
            validate_request(&[], 0),
            Err(Error::InvalidCapacity(_))
        ));
    }

    #[test]
    fn test_error_messages_name_the_item() {
        let err = validate_request(&[Item::new("ore", 0)], 6).unwrap_err();
        assert!(err.to_string().contains("ore"));

        let err = validate_request(&[Item::new("x", 1), Item::new("x", 1)], 6).unwrap_err();
        assert_eq!(err.to_string(), "Duplicate item id: x");
    }
}
