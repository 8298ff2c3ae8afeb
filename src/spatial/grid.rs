//! Occupancy map for variable-sized elements
//!
//! Every cell of an element's footprint maps to the same handle; the set of
//! distinct elements is derived from the map rather than stored. Lookups and
//! removal live here, the insertion algorithm in
//! [`crate::algorithm::placement`].

use crate::element::{ElementHandle, ListenerId, Signal};
use crate::io::error::{GridError, Result};
use crate::math::{Cell, Size};
use crate::spatial::bounds::{Boundary, Extent, Unbounded};
use crate::spatial::footprint::footprint;
use log::debug;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_GRID_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a grid
///
/// Elements remember the id of the grid they belong to instead of a pointer
/// to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridId(u64);

impl GridId {
    fn next() -> Self {
        Self(NEXT_GRID_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for GridId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "grid#{}", self.0)
    }
}

/// Spatial container mapping cells to the elements covering them
pub struct Grid<B = Unbounded> {
    pub(crate) id: GridId,
    pub(crate) boundary: B,
    pub(crate) cells: HashMap<Cell, ElementHandle>,
    pub(crate) updated: Signal<ElementHandle>,
}

/// Grid restricted to a fixed `width` x `height` area
pub type SizedGrid = Grid<Extent>;

impl Grid {
    /// Create an empty unbounded grid
    pub fn new() -> Self {
        Self::with_boundary(Unbounded)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid<Extent> {
    /// Create an empty grid accepting cells in `0..width` x `0..height`
    pub fn with_size(width: i32, height: i32) -> Self {
        Self::with_boundary(Extent::new(width, height))
    }

    /// Width and height of the grid
    pub const fn size(&self) -> Size {
        self.boundary.size()
    }
}

impl<B: Boundary> Grid<B> {
    /// Create an empty grid governed by `boundary`
    pub fn with_boundary(boundary: B) -> Self {
        Self {
            id: GridId::next(),
            boundary,
            cells: HashMap::new(),
            updated: Signal::new(),
        }
    }

    /// Identity of this grid
    pub const fn id(&self) -> GridId {
        self.id
    }

    /// Boundary policy of this grid
    pub const fn boundary(&self) -> &B {
        &self.boundary
    }

    /// Whether `element` occupies any cell of this grid
    ///
    /// Scans every occupied cell.
    pub fn contains_element(&self, element: &ElementHandle) -> bool {
        self.cells.values().any(|occupant| occupant == element)
    }

    /// Whether `position` is occupied
    pub fn has_element_at(&self, position: Cell) -> bool {
        self.cells.contains_key(&position)
    }

    /// Element covering `position`, if any
    pub fn get(&self, position: Cell) -> Option<&ElementHandle> {
        self.cells.get(&position)
    }

    /// Element covering `position`
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidPosition`] if the cell is empty; check
    /// [`Self::has_element_at`] first when emptiness is expected.
    pub fn element_at(&self, position: Cell) -> Result<ElementHandle> {
        self.cells
            .get(&position)
            .cloned()
            .ok_or(GridError::InvalidPosition { position })
    }

    /// Remove and return the element covering `position`
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidPosition`] if the cell is empty.
    pub fn remove_element_at(&mut self, position: Cell) -> Result<ElementHandle> {
        let element = self.element_at(position)?;
        self.remove_element(&element);
        Ok(element)
    }

    /// Remove `element` from every cell it covers
    ///
    /// Returns `false` without touching the grid if the element is not a
    /// member or has no recorded footprint. The element keeps its taken
    /// positions so it can be put back after a failed move elsewhere.
    pub fn remove_element(&mut self, element: &ElementHandle) -> bool {
        let taken = {
            let current = element.borrow();
            if !current.in_grid(self.id) || current.taken_positions().is_empty() {
                return false;
            }
            current.taken_positions().to_vec()
        };

        for cell in &taken {
            if self.cells.get(cell).is_some_and(|occupant| occupant == element) {
                self.cells.remove(cell);
            }
        }
        element.borrow_mut().detach();

        debug!("{} removed element at {:?}", self.id, taken.first());
        self.updated.emit(element);
        true
    }

    /// Remove every element
    pub fn clear(&mut self) {
        for element in self.elements() {
            self.remove_element(&element);
        }
    }

    /// Whether a `dims`-sized rectangle at `position` is inside the boundary
    /// and entirely unoccupied
    pub fn can_insert_at(&self, position: Cell, dims: Size) -> bool {
        self.boundary.admits(position, dims) && self.is_area_free(position, dims)
    }

    /// [`Self::can_insert_at`] using the element's current size
    pub fn can_insert_element_at(&self, position: Cell, element: &ElementHandle) -> bool {
        self.can_insert_at(position, element.size())
    }

    /// Distinct elements in the grid, in no particular order
    pub fn elements(&self) -> Vec<ElementHandle> {
        let mut seen = HashSet::new();
        self.cells
            .values()
            .filter(|element| seen.insert(*element))
            .cloned()
            .collect()
    }

    /// Number of distinct elements
    pub fn element_count(&self) -> usize {
        self.cells.values().collect::<HashSet<_>>().len()
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether no cell is occupied
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Occupied cells with their elements, in no particular order
    pub fn occupied_cells(&self) -> impl Iterator<Item = (Cell, &ElementHandle)> {
        self.cells.iter().map(|(cell, element)| (*cell, element))
    }

    /// Register a listener fired with the element whenever one is placed or
    /// removed
    pub fn subscribe(&self, listener: impl Fn(&ElementHandle) + 'static) -> ListenerId {
        self.updated.subscribe(listener)
    }

    /// Remove a grid listener
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        self.updated.unsubscribe(id)
    }

    pub(crate) fn is_area_free(&self, position: Cell, dims: Size) -> bool {
        footprint(position, dims).all(|cell| !self.cells.contains_key(&cell))
    }

    pub(crate) fn occupy(&mut self, element: &ElementHandle, cells: Vec<Cell>) {
        for cell in &cells {
            self.cells.insert(*cell, element.clone());
        }
        element.borrow_mut().attach(self.id, cells);
    }
}

impl<B: fmt::Debug> fmt::Debug for Grid<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("id", &self.id)
            .field("boundary", &self.boundary)
            .field("occupied_cells", &self.cells.len())
            .finish_non_exhaustive()
    }
}
