//! Spatial data structures
//!
//! This module contains the occupancy side of the crate:
//! - Footprint enumeration
//! - Boundary policies for bounded and unbounded grids
//! - The grid occupancy map itself
//! - Bit rasters of occupancy for area queries

/// Boundary policies applied before occupancy checks
pub mod bounds;
/// Row-major footprint enumeration
pub mod footprint;
/// Occupancy map, lookups and removal
pub mod grid;
/// Bit raster snapshots of grid occupancy
pub mod mask;

pub use bounds::{Boundary, Extent, Unbounded};
pub use grid::{Grid, GridId, SizedGrid};
