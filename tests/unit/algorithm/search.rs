//! Tests for first-fit and random slot selection

#[cfg(test)]
mod tests {
    use gridstash::algorithm::search::{first_fit, scatter};
    use gridstash::element::{BasicProfile, ElementHandle};
    use gridstash::math::{Cell, Size};
    use gridstash::spatial::bounds::Extent;
    use gridstash::spatial::grid::{Grid, SizedGrid};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn element(width: i32, height: i32) -> ElementHandle {
        ElementHandle::from_profile(BasicProfile::shared(width, height))
    }

    // Tests that the scan returns the first free anchor in row-major order
    // Verified by iterating columns in the outer loop
    #[test]
    fn test_first_fit_scans_row_major() {
        let mut grid = SizedGrid::with_size(4, 4);
        let region = Extent::new(4, 4);

        assert_eq!(first_fit(&grid, region, Size::new(2, 2)), Some(Cell::zero()));

        assert!(grid.insert_element_at(&element(2, 2), Cell::zero(), false));
        assert_eq!(first_fit(&grid, region, Size::new(2, 2)), Some(Cell::new(2, 0)));

        assert!(grid.insert_element_at(&element(2, 2), Cell::new(2, 0), false));
        assert_eq!(first_fit(&grid, region, Size::new(3, 1)), Some(Cell::new(0, 2)));
    }

    #[test]
    fn test_first_fit_full_or_degenerate() {
        let mut grid = Grid::new();
        let region = Extent::new(2, 2);
        assert!(grid.insert_element_at(&element(2, 2), Cell::zero(), false));

        assert_eq!(first_fit(&grid, region, Size::one()), None);
        assert_eq!(first_fit(&grid, Extent::new(5, 5), Size::new(0, 1)), None);
        assert_eq!(first_fit(&grid, region, Size::new(3, 3)), None);
    }

    // Tests that the grid's own boundary narrows the search region
    #[test]
    fn test_first_fit_respects_grid_boundary() {
        let grid = SizedGrid::with_size(2, 2);

        assert_eq!(first_fit(&grid, Extent::new(6, 6), Size::new(3, 3)), None);
    }

    // Tests that scattering never overlaps and places everything that fits
    // Verified by inserting with can_insert_at skipped and combine enabled
    #[test]
    fn test_scatter_places_without_overlap() {
        let mut grid = SizedGrid::with_size(12, 12);
        let elements: Vec<ElementHandle> = (0..6).map(|_| element(2, 2)).collect();
        let mut rng = StdRng::seed_from_u64(7);

        let placed = scatter(&mut grid, &elements, Extent::new(12, 12), &mut rng, 256);

        assert_eq!(placed, grid.element_count());
        assert_eq!(grid.occupied_count(), placed * 4);
        assert!(placed >= 1);
    }

    #[test]
    fn test_scatter_skips_elements_larger_than_region() {
        let mut grid = Grid::new();
        let elements = vec![element(5, 1), element(1, 1)];
        let mut rng = StdRng::seed_from_u64(1);

        let placed = scatter(&mut grid, &elements, Extent::new(3, 3), &mut rng, 16);

        assert_eq!(placed, 1);
        assert!(elements.first().is_some_and(|big| big.anchor().is_none()));
    }

    // Tests that equal seeds give equal layouts
    #[test]
    fn test_scatter_is_deterministic_per_seed() {
        let layout = |seed: u64| {
            let mut grid = SizedGrid::with_size(8, 8);
            let elements: Vec<ElementHandle> = (0..4).map(|_| element(1, 2)).collect();
            let mut rng = StdRng::seed_from_u64(seed);
            scatter(&mut grid, &elements, Extent::new(8, 8), &mut rng, 32);
            elements.iter().map(ElementHandle::anchor).collect::<Vec<_>>()
        };

        assert_eq!(layout(42), layout(42));
    }
}
