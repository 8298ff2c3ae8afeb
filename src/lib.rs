//! Spatial inventory grid for variable-sized elements
//!
//! Elements occupy rectangular footprints on an integer lattice. Grids keep
//! one owner per cell, move and stack elements, and capture their contents
//! as snapshots that can be restored through an asynchronous profile lookup.

#![forbid(unsafe_code)]

/// Insertion, moving, combining and free-slot search
pub mod algorithm;
/// Elements, profiles, runtime payloads and change signals
pub mod element;
/// Snapshots, catalogs, rendering, configuration and error handling
pub mod io;
/// Vectors and centring helpers
pub mod math;
/// Grid occupancy, boundaries and footprints
pub mod spatial;

pub use element::{CombineOutcome, Element, ElementHandle, ElementProfile, RuntimeData};
pub use io::error::{GridError, Result};
pub use io::snapshot::{ElementRecord, GridSnapshot};
pub use math::{Cell, Point, Size};
pub use spatial::{Extent, Grid, SizedGrid};
