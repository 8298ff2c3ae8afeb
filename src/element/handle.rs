//! Placeable elements and the shared handles grids store them behind
//!
//! A grid maps every cell of an element's footprint to the same
//! `ElementHandle`, so handles compare and hash by identity, never by value.

use crate::element::profile::ProfileRef;
use crate::element::runtime::RuntimeData;
use crate::math::{Cell, Size};
use crate::spatial::grid::GridId;
use std::cell::{Ref, RefCell, RefMut};
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// One placeable item: a profile plus per-instance state and placement
#[derive(Debug)]
pub struct Element {
    profile: ProfileRef,
    runtime: RuntimeData,
    taken_positions: Vec<Cell>,
    parent: Option<GridId>,
    rotated: bool,
}

impl Element {
    /// Create an element with the profile's default runtime data
    pub fn new(profile: ProfileRef) -> Self {
        let runtime = profile.default_runtime();
        Self::with_runtime(profile, runtime)
    }

    /// Create an element carrying existing runtime data
    pub const fn with_runtime(profile: ProfileRef, runtime: RuntimeData) -> Self {
        Self {
            profile,
            runtime,
            taken_positions: Vec::new(),
            parent: None,
            rotated: false,
        }
    }

    /// Wrap the element in a shared handle
    pub fn into_handle(self) -> ElementHandle {
        ElementHandle::new(self)
    }

    /// Profile describing this element
    pub const fn profile(&self) -> &ProfileRef {
        &self.profile
    }

    /// Per-instance state
    pub const fn runtime(&self) -> &RuntimeData {
        &self.runtime
    }

    /// Mutable per-instance state
    pub const fn runtime_mut(&mut self) -> &mut RuntimeData {
        &mut self.runtime
    }

    /// Replace the per-instance state
    pub fn set_runtime(&mut self, runtime: RuntimeData) {
        self.runtime = runtime;
    }

    /// Current footprint size, taking rotation into account
    pub fn size(&self) -> Size {
        let size = self.profile.size();
        if self.rotated { size.transposed() } else { size }
    }

    /// Whether the element is turned a quarter
    pub const fn is_rotated(&self) -> bool {
        self.rotated
    }

    /// Turn the element; takes effect on its next placement
    pub const fn set_rotated(&mut self, rotated: bool) {
        self.rotated = rotated;
    }

    /// Cells covered at the last successful placement, anchor first
    ///
    /// Kept after removal so a failed move can put the element back.
    pub fn taken_positions(&self) -> &[Cell] {
        &self.taken_positions
    }

    /// Origin cell of the last successful placement
    pub fn anchor(&self) -> Option<Cell> {
        self.taken_positions.first().copied()
    }

    /// Whether the last placement covered `position`
    pub fn in_position(&self, position: Cell) -> bool {
        self.taken_positions.contains(&position)
    }

    /// Grid the element currently belongs to
    pub const fn parent_grid(&self) -> Option<GridId> {
        self.parent
    }

    /// Whether the element currently belongs to `grid`
    pub fn in_grid(&self, grid: GridId) -> bool {
        self.parent == Some(grid)
    }

    pub(crate) fn attach(&mut self, grid: GridId, cells: Vec<Cell>) {
        self.parent = Some(grid);
        self.taken_positions = cells;
    }

    pub(crate) const fn detach(&mut self) {
        self.parent = None;
    }
}

/// Shared, identity-compared handle to an element
#[derive(Debug, Clone)]
pub struct ElementHandle(Rc<RefCell<Element>>);

impl ElementHandle {
    /// Wrap an element
    pub fn new(element: Element) -> Self {
        Self(Rc::new(RefCell::new(element)))
    }

    /// Create a fresh element of `profile` behind a new handle
    pub fn from_profile(profile: ProfileRef) -> Self {
        Self::new(Element::new(profile))
    }

    /// Immutably borrow the element
    ///
    /// # Panics
    ///
    /// Panics if the element is currently mutably borrowed.
    pub fn borrow(&self) -> Ref<'_, Element> {
        self.0.borrow()
    }

    /// Mutably borrow the element
    ///
    /// # Panics
    ///
    /// Panics if the element is currently borrowed.
    pub fn borrow_mut(&self) -> RefMut<'_, Element> {
        self.0.borrow_mut()
    }

    /// Profile of the element
    pub fn profile(&self) -> ProfileRef {
        Rc::clone(self.0.borrow().profile())
    }

    /// Current footprint size
    pub fn size(&self) -> Size {
        self.0.borrow().size()
    }

    /// Origin cell of the last successful placement
    pub fn anchor(&self) -> Option<Cell> {
        self.0.borrow().anchor()
    }

    /// Copy of the cells covered at the last successful placement
    pub fn taken_positions(&self) -> Vec<Cell> {
        self.0.borrow().taken_positions().to_vec()
    }

    /// Copy of the runtime data
    pub fn runtime(&self) -> RuntimeData {
        self.0.borrow().runtime().clone()
    }

    /// Whether the element currently belongs to `grid`
    pub fn in_grid(&self, grid: GridId) -> bool {
        self.0.borrow().in_grid(grid)
    }

    /// Whether both handles refer to the same element
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl From<Element> for ElementHandle {
    fn from(element: Element) -> Self {
        Self::new(element)
    }
}

impl PartialEq for ElementHandle {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for ElementHandle {}

impl Hash for ElementHandle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Rc::as_ptr(&self.0).hash(state);
    }
}
