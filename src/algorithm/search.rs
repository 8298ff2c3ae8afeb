//! Automatic slot selection for elements placed without an explicit position

use crate::element::ElementHandle;
use crate::math::{Cell, Size};
use crate::spatial::bounds::{Boundary, Extent};
use crate::spatial::grid::Grid;
use crate::spatial::mask::OccupancyMask;
use log::debug;
use rand::Rng;

/// First anchor in `region`, in row-major order, where a `dims`-sized
/// rectangle is free and admitted by the grid's boundary
pub fn first_fit<B: Boundary>(grid: &Grid<B>, region: Extent, dims: Size) -> Option<Cell> {
    if dims.x <= 0 || dims.y <= 0 {
        return None;
    }

    let mask = OccupancyMask::from_grid(grid, region);
    let last_x = region.width - dims.x;
    let last_y = region.height - dims.y;

    (0..=last_y)
        .flat_map(|y| (0..=last_x).map(move |x| Cell::new(x, y)))
        .find(|&anchor| mask.is_area_free(anchor, dims) && grid.boundary().admits(anchor, dims))
}

/// Try to place each element at random anchors inside `region`
///
/// Each element gets up to `attempts` uniformly drawn anchors and is inserted
/// without combining. Returns the number of elements placed.
pub fn scatter<B: Boundary, R: Rng>(
    grid: &mut Grid<B>,
    elements: &[ElementHandle],
    region: Extent,
    rng: &mut R,
    attempts: usize,
) -> usize {
    let mut placed = 0;

    for element in elements {
        let size = element.size();
        let span_x = region.width - size.x;
        let span_y = region.height - size.y;
        if span_x < 0 || span_y < 0 {
            continue;
        }

        for _ in 0..attempts {
            let anchor = Cell::new(rng.random_range(0..=span_x), rng.random_range(0..=span_y));
            if grid.can_insert_element_at(anchor, element)
                && grid.insert_element_at(element, anchor, false)
            {
                placed += 1;
                break;
            }
        }
    }

    debug!("scattered {placed} of {} elements", elements.len());
    placed
}
