//! Rectangular footprint enumeration
//!
//! Every placement, feasibility check and restoration walks the same
//! row-major order, so the first colliding cell of a scan is well defined.

use crate::math::{Cell, Size};
use std::iter::FusedIterator;

/// Row-major iterator over the cells of a rectangle anchored at its top-left
///
/// Yields nothing when either dimension is zero or negative. Cells beyond
/// `i32::MAX` on either axis are cut off rather than wrapped.
#[derive(Debug, Clone)]
pub struct Footprint {
    origin: Cell,
    width: usize,
    total: usize,
    index: usize,
}

impl Footprint {
    /// Create the footprint of a `dims`-sized rectangle at `origin`
    pub fn new(origin: Cell, dims: Size) -> Self {
        let width = span(origin.x, dims.x);
        let height = span(origin.y, dims.y);

        Self {
            origin,
            width,
            total: width.saturating_mul(height),
            index: 0,
        }
    }

    /// The anchor cell of the rectangle
    pub const fn origin(&self) -> Cell {
        self.origin
    }
}

impl Iterator for Footprint {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        if self.index >= self.total {
            return None;
        }

        let column = self.index % self.width;
        let row = self.index / self.width;
        self.index += 1;

        match (offset(self.origin.x, column), offset(self.origin.y, row)) {
            (Some(x), Some(y)) => Some(Cell::new(x, y)),
            _ => {
                self.index = self.total;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total - self.index;
        (remaining, Some(remaining))
    }
}

// Number of cells along one axis that stay within i32 range
fn span(origin: i32, extent: i32) -> usize {
    let extent = usize::try_from(extent).unwrap_or(0);
    let room = usize::try_from(i64::from(i32::MAX) - i64::from(origin) + 1).unwrap_or(usize::MAX);
    extent.min(room)
}

fn offset(origin: i32, step: usize) -> Option<i32> {
    i32::try_from(step).ok().and_then(|step| origin.checked_add(step))
}

impl ExactSizeIterator for Footprint {}

impl FusedIterator for Footprint {}

/// Footprint of a `dims`-sized rectangle anchored at `position`
pub fn footprint(position: Cell, dims: Size) -> Footprint {
    Footprint::new(position, dims)
}

/// All positions covered by a `dims`-sized rectangle anchored at `position`,
/// in row-major order
pub fn select_positions(position: Cell, dims: Size) -> Vec<Cell> {
    footprint(position, dims).collect()
}
