//! 2D landmark point in normalized image space

use std::ops::Sub;

use nalgebra::Vector2;

/// A single 2D point (normalized coordinates, usually 0-1 but not assumed)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Ray from `rhs` to `self`
impl Sub for Point2D {
    type Output = Vector2<f64>;

    fn sub(self, rhs: Point2D) -> Vector2<f64> {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Arithmetic mean of a left/right landmark pair
///
/// Halves before adding so large finite inputs stay finite.
pub fn midpoint(a: Point2D, b: Point2D) -> Point2D {
    Point2D::new(a.x / 2.0 + b.x / 2.0, a.y / 2.0 + b.y / 2.0)
}
