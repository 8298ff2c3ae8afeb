//! Positional helpers for placing multi-cell elements against a reference point
//!
//! `grid_centre` gives the geometric centre of a span in cell-corner
//! coordinates. `smart_grid_centre` turns that into an integer offset, picking
//! the rounding direction on even spans from the sign of a difference so a
//! dragged element does not jitter as it crosses its pivot.

use crate::math::vector::{Cell, Point, Size};

/// Mean of the given cells plus `offset` on both axes
///
/// Returns `None` for an empty slice, which has no average.
pub fn average_position(cells: &[Cell], offset: f32) -> Option<Point> {
    if cells.is_empty() {
        return None;
    }

    let (sum_x, sum_y) = cells.iter().fold((0_i64, 0_i64), |(sx, sy), cell| {
        (sx + i64::from(cell.x), sy + i64::from(cell.y))
    });
    let count = cells.len() as f64;

    Some(Point::new(
        (sum_x as f64 / count) as f32 + offset,
        (sum_y as f64 / count) as f32 + offset,
    ))
}

/// Centre of a `size`-cell area
///
/// Each axis halves with integer division before the half-cell shift, so
/// spans of 2 and 3 both centre on `0.5`.
pub fn grid_centre(size: Size) -> Point {
    Point::new(half_span_centre(size.x), half_span_centre(size.y))
}

/// Integer centring offset for `size`, balanced against `difference`
///
/// Equivalent to [`smart_grid_centre_around`] with the pivot at the origin.
pub fn smart_grid_centre(difference: Point, size: Size) -> Cell {
    smart_grid_centre_around(difference, Point::zero(), size)
}

/// Integer centring offset for `size`, balanced against `difference`
/// relative to `centre`
///
/// Odd spans have an exact centre and always round up. Even spans round up
/// on x while the difference is left of the pivot and down otherwise; on y
/// they round down while the difference is past the pivot and up otherwise.
pub fn smart_grid_centre_around(difference: Point, centre: Point, size: Size) -> Cell {
    let exact = grid_centre(size);

    let x = axis_offset(size.x, exact.x, difference.x < centre.x);
    let y = axis_offset(size.y, exact.y, difference.y <= centre.y);

    Cell::new(x, y)
}

fn half_span_centre(span: i32) -> f32 {
    (span / 2) as f32 - 0.5
}

fn axis_offset(span: i32, exact: f32, round_up: bool) -> i32 {
    if span % 2 != 0 || round_up {
        exact.ceil() as i32
    } else {
        exact.floor() as i32
    }
}
