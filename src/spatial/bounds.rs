//! Boundary policies layered on top of the occupancy check
//!
//! A boundary only ever narrows where a grid accepts elements: the occupancy
//! check always runs after it.

use crate::math::{Cell, Size};
use serde::{Deserialize, Serialize};

/// Admission rule for rectangles placed on a grid
pub trait Boundary {
    /// Whether the `dims`-sized rectangle anchored at `position` lies inside
    fn admits(&self, position: Cell, dims: Size) -> bool;

    /// Fixed extent of the boundary, if it has one
    fn extent(&self) -> Option<Extent> {
        None
    }
}

/// Boundary of an infinite grid
///
/// Admits every rectangle whose cells are all addressable, i.e. whose far
/// edges do not pass `i32::MAX`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unbounded;

impl Boundary for Unbounded {
    fn admits(&self, position: Cell, dims: Size) -> bool {
        let right = i64::from(position.x) + i64::from(dims.x) - 1;
        let bottom = i64::from(position.y) + i64::from(dims.y) - 1;

        right <= i64::from(i32::MAX) && bottom <= i64::from(i32::MAX)
    }
}

/// Fixed `width` x `height` area anchored at the origin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Extent {
    /// Number of columns
    pub width: i32,
    /// Number of rows
    pub height: i32,
}

impl Extent {
    /// Create an extent of the given dimensions
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// The extent as a size vector
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Whether a single cell lies inside the extent
    pub const fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && cell.x < self.width && cell.y < self.height
    }

    /// Number of cells covered
    pub const fn cell_count(&self) -> usize {
        if self.width <= 0 || self.height <= 0 {
            0
        } else {
            self.width as usize * self.height as usize
        }
    }
}

impl Boundary for Extent {
    fn admits(&self, position: Cell, dims: Size) -> bool {
        // Far edges in i64 so huge footprints cannot wrap back inside
        let right = i64::from(position.x) + i64::from(dims.x) - 1;
        let bottom = i64::from(position.y) + i64::from(dims.y) - 1;

        !(right >= i64::from(self.width)
            || bottom >= i64::from(self.height)
            || position.x < 0
            || position.y < 0)
    }

    fn extent(&self) -> Option<Extent> {
        Some(*self)
    }
}
