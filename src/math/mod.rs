//! Vector arithmetic and positional utilities

/// Centring and averaging helpers for multi-cell elements
pub mod centering;
/// Generic two-component vectors and the coordinate aliases built on them
pub mod vector;

pub use vector::{Cell, Point, Size, Vec2};
