//! `ggpatterns::mathcore` module implements the small amount of math that
//! the rest of the crate needs: floating point equality and [`Vector2`], which is
//! used for instance placement and movement commands.
//!
//! `ggpatterns` does not render anything, so there are no matrices or shapes here -
//! the embedding application is expected to convert [`Vector2`] into its own
//! engine types.
//!

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// Constant that is used in floating point equality.
///
/// It represents relative difference that is allowed for two `f32` values to still be considered
/// equal.
///
pub const EPSILON: f32 = 0.00001;
/// Floating point equality used throughout `ggpatterns`.
///
/// # Example
/// ```rust
/// # use ggpatterns::mathcore::almost_equal;
/// assert!(almost_equal(0.15 + 0.15, 0.1 + 0.2));
/// assert!(!almost_equal(0.1, 0.2));
/// ```
///
pub fn almost_equal(a: f32, b: f32) -> bool {
    if a == b {
        return true;
    }

    let diff = (a - b).abs();
    let norm = (a.abs() + b.abs()).min(f32::MAX);
    diff < (norm * EPSILON).max(f32::MIN_POSITIVE)
}

/// [`Vector2`] struct represents two-dimensional vector and two-dimensional point with `f32` coordinates on a plane.
///
/// Equality is implemented with [`almost_equal`], so vectors that went through
/// several float operations still compare as expected.
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default)]
pub struct Vector2 {
    /// X component of vector.
    ///
    pub x: f32,

    /// Y component of vector.
    ///
    pub y: f32,
}
impl Vector2 {
    /// Initializes vector with zeroes.
    ///
    pub fn zero() -> Self {
        Vector2 { x: 0.0, y: 0.0 }
    }
    /// Initializes vector with ones.
    ///
    pub fn one() -> Self {
        Vector2 { x: 1.0, y: 1.0 }
    }

    /// Returns squared magnitude of a vector.
    ///
    pub fn sqr_magnitude(&self) -> f32 {
        self.x * self.x + self.y * self.y
    }
    /// Returns magnitude of a vector.
    ///
    pub fn magnitude(&self) -> f32 {
        self.sqr_magnitude().sqrt()
    }
    /// Returns distance between two points.
    ///
    /// # Example
    /// ```rust
    /// # use ggpatterns::mathcore::Vector2;
    /// let a: Vector2 = Vector2 { x: 1.0, y: 1.0 };
    /// let b: Vector2 = Vector2 { x: 4.0, y: 5.0 };
    /// assert_eq!(a.distance(b), 5.0);
    /// ```
    ///
    pub fn distance(self, other: Self) -> f32 {
        (other - self).magnitude()
    }

    /// Performs dot product operation on two vectors.
    ///
    pub fn dot_product(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }
}
impl PartialEq for Vector2 {
    fn eq(&self, other: &Self) -> bool {
        almost_equal(self.x, other.x) && almost_equal(self.y, other.y)
    }
}
impl From<[f32; 2]> for Vector2 {
    fn from(value: [f32; 2]) -> Self {
        Vector2 {
            x: value[0],
            y: value[1],
        }
    }
}
impl From<Vector2> for [f32; 2] {
    fn from(value: Vector2) -> Self {
        [value.x, value.y]
    }
}
impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Self) -> Self::Output {
        Vector2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}
impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Self) -> Self::Output {
        Vector2 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
impl SubAssign for Vector2 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}
impl Mul<f32> for Vector2 {
    type Output = Vector2;

    fn mul(self, rhs: f32) -> Self::Output {
        Vector2 {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}
impl Div<f32> for Vector2 {
    type Output = Vector2;

    fn div(self, rhs: f32) -> Self::Output {
        Vector2 {
            x: self.x / rhs,
            y: self.y / rhs,
        }
    }
}
impl Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Self::Output {
        Vector2 {
            x: -self.x,
            y: -self.y,
        }
    }
}
