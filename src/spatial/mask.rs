use crate::math::{Cell, Size};
use crate::spatial::bounds::{Boundary, Extent};
use crate::spatial::footprint::footprint;
use crate::spatial::grid::Grid;
use bitvec::prelude::*;
use std::fmt;

/// Bit raster of which cells in a fixed region are occupied
///
/// Taken as a snapshot of a grid so repeated area queries avoid hashing.
/// Bits are stored row-major; cells outside the region read as occupied.
#[derive(Clone, Debug)]
pub struct OccupancyMask {
    region: Extent,
    bits: BitVec,
}

impl OccupancyMask {
    /// Create a mask with every cell of `region` free
    pub fn empty(region: Extent) -> Self {
        Self {
            region,
            bits: bitvec![0; region.cell_count()],
        }
    }

    /// Capture the occupancy of `grid` inside `region`
    pub fn from_grid<B: Boundary>(grid: &Grid<B>, region: Extent) -> Self {
        let mut mask = Self::empty(region);
        for (cell, _) in grid.occupied_cells() {
            mask.set(cell, true);
        }
        mask
    }

    /// Region covered by the mask
    pub const fn region(&self) -> Extent {
        self.region
    }

    /// Mark a cell occupied or free; ignored outside the region
    pub fn set(&mut self, cell: Cell, occupied: bool) {
        if let Some(index) = self.index_of(cell) {
            self.bits.set(index, occupied);
        }
    }

    /// Whether a cell is occupied or lies outside the region
    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.index_of(cell)
            .is_none_or(|index| self.bits.get(index).is_some_and(|bit| *bit))
    }

    /// Whether every cell of the `dims`-sized rectangle at `position` is
    /// inside the region and free
    pub fn is_area_free(&self, position: Cell, dims: Size) -> bool {
        self.region.admits(position, dims)
            && footprint(position, dims).all(|cell| !self.is_occupied(cell))
    }

    /// Number of occupied cells inside the region
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Number of free cells inside the region
    pub fn free_count(&self) -> usize {
        self.bits.count_zeros()
    }

    fn index_of(&self, cell: Cell) -> Option<usize> {
        if !self.region.contains(cell) {
            return None;
        }
        Some(cell.y as usize * self.region.width as usize + cell.x as usize)
    }
}

impl fmt::Display for OccupancyMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "OccupancyMask({}x{}, {} occupied)",
            self.region.width,
            self.region.height,
            self.count()
        )
    }
}
