//! Shared descriptors for element types
//!
//! A profile is owned by whoever loaded it (an asset catalog, a test) and is
//! handed to elements as a reference-counted pointer. Two elements share a
//! profile only when they point at the same instance.

use crate::element::handle::Element;
use crate::element::runtime::RuntimeData;
use crate::element::signal::UpdateSignal;
use crate::math::Size;
use std::fmt;
use std::rc::Rc;

/// Shared handle to a profile
pub type ProfileRef = Rc<dyn ElementProfile>;

/// Result of asking a profile to merge an incoming element into an occupant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombineOutcome {
    /// The incoming element was merged completely and no longer needs a slot
    Absorbed,
    /// The incoming element still exists; it may have been partially merged
    Rejected,
}

/// Size, behaviour and notification channel shared by all elements of a type
pub trait ElementProfile: fmt::Debug {
    /// Footprint of an unrotated element
    fn size(&self) -> Size;

    /// Fresh runtime payload for a newly created element
    fn default_runtime(&self) -> RuntimeData {
        RuntimeData::Empty
    }

    /// Merge `incoming` into `existing`, e.g. to stack items
    ///
    /// Either operand may be mutated. The default never merges.
    fn combine(&self, _existing: &mut Element, _incoming: &mut Element) -> CombineOutcome {
        CombineOutcome::Rejected
    }

    /// External reference used to find this profile again when restoring
    ///
    /// Elements of profiles without a reference are left out of snapshots.
    fn reference(&self) -> Option<&str> {
        None
    }

    /// Listeners interested in state changes of elements of this type
    fn updates(&self) -> &UpdateSignal;

    /// Notify listeners that an element of this type changed
    fn updated(&self) {
        self.updates().emit(&());
    }
}

/// Whether two profile handles point at the same profile
pub fn same_profile(a: &ProfileRef, b: &ProfileRef) -> bool {
    Rc::ptr_eq(a, b)
}

/// Fixed-size profile with no combine logic and no external reference
#[derive(Debug)]
pub struct BasicProfile {
    size: Size,
    updates: UpdateSignal,
}

impl BasicProfile {
    /// Create a profile covering `width` x `height` cells
    pub const fn new(width: i32, height: i32) -> Self {
        Self {
            size: Size::new(width, height),
            updates: UpdateSignal::new(),
        }
    }

    /// Create a shared handle to a new profile
    pub fn shared(width: i32, height: i32) -> ProfileRef {
        Rc::new(Self::new(width, height))
    }
}

impl ElementProfile for BasicProfile {
    fn size(&self) -> Size {
        self.size
    }

    fn updates(&self) -> &UpdateSignal {
        &self.updates
    }
}
