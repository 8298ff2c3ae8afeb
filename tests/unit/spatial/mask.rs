//! Tests for bit raster occupancy snapshots

#[cfg(test)]
mod tests {
    use gridstash::element::{BasicProfile, ElementHandle};
    use gridstash::math::{Cell, Size};
    use gridstash::spatial::bounds::Extent;
    use gridstash::spatial::grid::Grid;
    use gridstash::spatial::mask::OccupancyMask;

    #[test]
    fn test_empty_mask_is_all_free() {
        let mask = OccupancyMask::empty(Extent::new(3, 2));

        assert_eq!(mask.count(), 0);
        assert_eq!(mask.free_count(), 6);
        assert_eq!(mask.region(), Extent::new(3, 2));
    }

    // Tests that a captured mask mirrors the grid inside its region only
    // Verified by transposing the index computation
    #[test]
    fn test_from_grid_captures_region() {
        let mut grid = Grid::new();
        let block = ElementHandle::from_profile(BasicProfile::shared(2, 1));
        let outside = ElementHandle::from_profile(BasicProfile::shared(1, 1));
        assert!(grid.insert_element_at(&block, Cell::new(1, 0), false));
        assert!(grid.insert_element_at(&outside, Cell::new(10, 10), false));

        let mask = OccupancyMask::from_grid(&grid, Extent::new(3, 3));

        assert_eq!(mask.count(), 2);
        assert!(mask.is_occupied(Cell::new(1, 0)));
        assert!(mask.is_occupied(Cell::new(2, 0)));
        assert!(!mask.is_occupied(Cell::new(0, 1)));
    }

    // Tests that cells outside the region count as occupied
    #[test]
    fn test_outside_cells_are_occupied() {
        let mut mask = OccupancyMask::empty(Extent::new(2, 2));

        assert!(mask.is_occupied(Cell::new(-1, 0)));
        assert!(mask.is_occupied(Cell::new(2, 0)));

        mask.set(Cell::new(5, 5), true);
        assert_eq!(mask.count(), 0);
    }

    #[test]
    fn test_area_queries() {
        let mut mask = OccupancyMask::empty(Extent::new(4, 4));
        mask.set(Cell::new(1, 1), true);

        assert!(!mask.is_area_free(Cell::new(0, 0), Size::new(2, 2)));
        assert!(mask.is_area_free(Cell::new(2, 2), Size::new(2, 2)));
        assert!(!mask.is_area_free(Cell::new(3, 3), Size::new(2, 2)));

        mask.set(Cell::new(1, 1), false);
        assert!(mask.is_area_free(Cell::new(0, 0), Size::new(2, 2)));
        assert_eq!(mask.to_string(), "OccupancyMask(4x4, 0 occupied)");
    }
}
