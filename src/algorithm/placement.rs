//! Insertion, moving and combining of elements
//!
//! Insertion always starts by taking the element out of the grid, which makes
//! it a move primitive: a rejected placement puts the element back where it
//! came from if it can.
//!
//! Combining reacts only to the first occupied cell met in the row-major
//! footprint scan. Overlaps with further occupants in the same footprint are
//! not considered.

use crate::element::profile::same_profile;
use crate::element::{CombineOutcome, ElementHandle};
use crate::math::Cell;
use crate::spatial::bounds::Boundary;
use crate::spatial::footprint::{footprint, select_positions};
use crate::spatial::grid::Grid;
use log::{debug, trace};

impl<B: Boundary> Grid<B> {
    /// Place `element` with its anchor at `position`
    ///
    /// If the element is already in this grid it is moved. With
    /// `combine_elements` set, landing on an element of the same profile asks
    /// the profile to merge the two; the call succeeds only if the incoming
    /// element is absorbed completely.
    ///
    /// Returns `false` when the placement is rejected. The grid is then
    /// unchanged, except that a moved element is put back at its previous
    /// anchor; if that spot cannot take it any more, the element ends up in
    /// no grid. Elements belonging to another grid are always rejected.
    pub fn insert_element_at(
        &mut self,
        element: &ElementHandle,
        position: Cell,
        combine_elements: bool,
    ) -> bool {
        let parent = element.borrow().parent_grid();
        if let Some(parent) = parent
            && parent != self.id
        {
            trace!("{} rejected element owned by {parent}", self.id);
            return false;
        }

        let moved = self.remove_element(element);
        let size = element.size();

        if combine_elements && self.boundary.admits(position, size) {
            let occupant = footprint(position, size).find_map(|cell| self.cells.get(&cell).cloned());

            if let Some(occupant) = occupant {
                if self.combine_into(&occupant, element) {
                    return true;
                }
                if moved {
                    self.restore_origin(element);
                }
                return false;
            }
        }

        if footprint(position, size).len() == 0 || !self.can_insert_at(position, size) {
            trace!("{} rejected placement at {position}", self.id);
            if moved {
                self.restore_origin(element);
            }
            return false;
        }

        self.occupy(element, select_positions(position, size));
        debug!("{} placed element at {position}", self.id);
        self.updated.emit(element);
        true
    }

    /// Move the element covering `from` so its anchor lands on `to`
    ///
    /// Returns `false` if `from` is empty or the move is rejected.
    pub fn move_element(&mut self, from: Cell, to: Cell, combine_elements: bool) -> bool {
        let Some(element) = self.cells.get(&from).cloned() else {
            return false;
        };
        self.insert_element_at(&element, to, combine_elements)
    }

    // Delegates to the occupant's profile; true when the incoming element
    // was absorbed.
    fn combine_into(&self, occupant: &ElementHandle, incoming: &ElementHandle) -> bool {
        let profile = occupant.profile();
        if !same_profile(&profile, &incoming.profile()) {
            return false;
        }

        let outcome = {
            let mut existing = occupant.borrow_mut();
            let mut arriving = incoming.borrow_mut();
            profile.combine(&mut existing, &mut arriving)
        };

        match outcome {
            CombineOutcome::Absorbed => {
                debug!("{} combined element into occupant", self.id);
                profile.updated();
                true
            }
            CombineOutcome::Rejected => false,
        }
    }

    fn restore_origin(&mut self, element: &ElementHandle) {
        let Some(anchor) = element.anchor() else {
            return;
        };
        let size = element.size();

        if footprint(anchor, size).len() > 0 && self.can_insert_at(anchor, size) {
            self.occupy(element, select_positions(anchor, size));
            self.updated.emit(element);
        } else {
            debug!("{} could not restore element to {anchor}", self.id);
        }
    }
}
