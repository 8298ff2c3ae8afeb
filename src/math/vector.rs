//! Two-component vectors shared by grid coordinates, footprint sizes and
//! continuous positions
//!
//! A single generic `Vec2` keeps integer cells and floating point centres on
//! the same arithmetic, with `num_traits` providing the numeric bounds.

use num_traits::{Num, NumCast, ToPrimitive};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Pair of `x`/`y` components
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Vec2<T> {
    /// Horizontal component (column)
    pub x: T,
    /// Vertical component (row)
    pub y: T,
}

/// Integer grid coordinate
pub type Cell = Vec2<i32>;

/// Width and height of a footprint in cells
pub type Size = Vec2<i32>;

/// Continuous position, used for averaged and centred coordinates
pub type Point = Vec2<f32>;

impl<T> Vec2<T> {
    /// Create a vector from its components
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Num + Copy> Vec2<T> {
    /// Vector with the same value on both axes
    pub const fn splat(value: T) -> Self {
        Self { x: value, y: value }
    }

    /// The origin
    pub fn zero() -> Self {
        Self::splat(T::zero())
    }

    /// Unit size on both axes
    pub fn one() -> Self {
        Self::splat(T::one())
    }

    /// Product of both components
    ///
    /// For a `Size` this is the number of cells covered.
    pub fn area(self) -> T {
        self.x * self.y
    }

    /// Components exchanged, used for quarter-turn rotation of a size
    #[must_use]
    pub const fn transposed(self) -> Self {
        Self {
            x: self.y,
            y: self.x,
        }
    }
}

impl<T: ToPrimitive + Copy> Vec2<T> {
    /// Numeric conversion of both components
    ///
    /// Returns `None` if either component is not representable in `U`.
    pub fn cast<U: NumCast>(self) -> Option<Vec2<U>> {
        Some(Vec2 {
            x: U::from(self.x)?,
            y: U::from(self.y)?,
        })
    }
}

impl<T: Num + Copy> Add for Vec2<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Num + Copy> Sub for Vec2<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Num + Copy> Mul<T> for Vec2<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl<T: Neg<Output = T>> Neg for Vec2<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl<T> From<(T, T)> for Vec2<T> {
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

impl<T: fmt::Display> fmt::Display for Vec2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
