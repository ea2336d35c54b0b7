//! Geometry module - 2D points and joint angles
//!
//! Re-exports only. All logic in submodules.

mod point;
mod angles;
mod rounding;

pub use point::{Point2D, midpoint};
pub use angles::{compute_angle, try_compute_angle, GeometryError, DEGENERATE_ANGLE};
pub use rounding::{round_tenth, js_round};
