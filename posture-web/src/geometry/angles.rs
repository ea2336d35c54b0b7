//! Joint angle calculation using dot product
//!
//! Calculates the included angle at a vertex from the rays
//! vertex→a and vertex→c. The arccos form is the only formula used
//! anywhere in the crate, so every angle shares the same [0°, 180°] range.

use nalgebra::Vector2;
use thiserror::Error;

use super::point::Point2D;

/// Returned by `compute_angle` when a ray has zero length
pub const DEGENERATE_ANGLE: f64 = 0.0;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    /// One of the rays has zero (or non-finite) length
    #[error("invalid geometry: degenerate ray at vertex {vertex:?}")]
    InvalidGeometry { vertex: Point2D },
}

/// Divide by the largest component so the norm cannot overflow.
/// The angle between two rays does not depend on their lengths.
fn rescale(ray: Vector2<f64>) -> Vector2<f64> {
    ray / ray.x.abs().max(ray.y.abs())
}

/// Calculate the angle at `b` in degrees, failing on degenerate rays
///
/// Uses dot product formula: cos(θ) = (ba · bc) / (|ba| × |bc|)
///
/// The cosine is clamped to [-1, 1] before `acos` so rounding error on
/// nearly collinear points cannot produce NaN.
pub fn try_compute_angle(a: Point2D, b: Point2D, c: Point2D) -> Result<f64, GeometryError> {
    let ba = rescale(a - b);
    let bc = rescale(c - b);

    let mag_ba = ba.norm();
    let mag_bc = bc.norm();

    // Zero-length rays rescale to NaN, rejected here with any other NaN
    if !(mag_ba > 0.0 && mag_bc > 0.0) {
        return Err(GeometryError::InvalidGeometry { vertex: b });
    }

    let cos_angle = ba.dot(&bc) / (mag_ba * mag_bc);
    if !cos_angle.is_finite() {
        return Err(GeometryError::InvalidGeometry { vertex: b });
    }

    Ok(cos_angle.clamp(-1.0, 1.0).acos().to_degrees())
}

/// Calculate the angle at `b` in degrees
///
/// Returns:
/// - 180° = a, b, c on a straight line with b in the middle
/// - 0° = a and c on the same side of b
/// - `DEGENERATE_ANGLE` if a or c coincides with b
pub fn compute_angle(a: Point2D, b: Point2D, c: Point2D) -> f64 {
    try_compute_angle(a, b, c).unwrap_or(DEGENERATE_ANGLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    fn p(x: f64, y: f64) -> Point2D {
        Point2D::new(x, y)
    }

    #[test]
    fn test_straight_line() {
        let angle = compute_angle(p(0.0, 0.0), p(0.5, 0.0), p(1.0, 0.0));
        assert!((angle - 180.0).abs() < EPS);
    }

    #[test]
    fn test_same_side_is_zero() {
        let angle = compute_angle(p(2.0, 0.0), p(0.0, 0.0), p(1.0, 0.0));
        assert!(angle.abs() < EPS);
    }

    #[test]
    fn test_right_angle() {
        let angle = compute_angle(p(1.0, 0.0), p(0.0, 0.0), p(0.0, 1.0));
        assert!((angle - 90.0).abs() < EPS);
    }

    #[test]
    fn test_vertical_collinear() {
        // Ear above shoulder above hip
        let angle = compute_angle(p(0.5, 0.2), p(0.5, 0.4), p(0.5, 0.8));
        assert!((angle - 180.0).abs() < EPS);
    }

    #[test]
    fn test_symmetric() {
        let triples = [
            (p(0.1, 0.9), p(0.4, 0.4), p(0.8, 0.7)),
            (p(-3.0, 2.0), p(1.0, 1.0), p(5.0, -7.5)),
            (p(0.51, 0.2), p(0.5, 0.45), p(0.49, 0.81)),
        ];
        for (a, b, c) in triples {
            let forward = compute_angle(a, b, c);
            let backward = compute_angle(c, b, a);
            assert!((forward - backward).abs() < EPS, "{forward} vs {backward}");
        }
    }

    #[test]
    fn test_range_over_grid() {
        let b = p(0.5, 0.5);
        for i in 0..12 {
            for j in 0..12 {
                let a = p(i as f64 * 0.1 - 0.05, j as f64 * 0.07 + 0.01);
                let c = p(j as f64 * 0.09 - 0.3, i as f64 * 0.11 - 0.2);
                let angle = compute_angle(a, b, c);
                assert!(angle.is_finite());
                assert!((0.0..=180.0).contains(&angle), "{angle} out of range");
            }
        }
    }

    #[test]
    fn test_degenerate_returns_sentinel() {
        let b = p(0.3, 0.3);
        assert_eq!(compute_angle(b, b, p(0.9, 0.1)), DEGENERATE_ANGLE);
        assert_eq!(compute_angle(p(0.9, 0.1), b, b), DEGENERATE_ANGLE);
        assert_eq!(compute_angle(b, b, b), DEGENERATE_ANGLE);
    }

    #[test]
    fn test_degenerate_is_signalled() {
        let b = p(0.3, 0.3);
        let err = try_compute_angle(b, b, p(0.9, 0.1)).unwrap_err();
        assert_eq!(err, GeometryError::InvalidGeometry { vertex: b });
    }

    #[test]
    fn test_non_finite_input_never_nan() {
        let angle = compute_angle(p(f64::NAN, 0.0), p(0.0, 0.0), p(1.0, 0.0));
        assert_eq!(angle, DEGENERATE_ANGLE);

        let angle = compute_angle(p(f64::INFINITY, 0.0), p(0.0, 0.0), p(1.0, 0.0));
        assert_eq!(angle, DEGENERATE_ANGLE);
    }

    #[test]
    fn test_huge_rays_do_not_overflow() {
        let angle = compute_angle(p(1e307, 0.0), p(-1e307, 0.0), p(-1e307, 1.5e308));
        assert!((angle - 90.0).abs() < EPS);

        let tiny = compute_angle(p(1e-300, 0.0), p(0.0, 0.0), p(0.0, 1e-300));
        assert!((tiny - 90.0).abs() < EPS);
    }

    #[test]
    fn test_nearly_collinear_is_clamped() {
        // Large coordinates push the cosine past -1 without the clamp
        let angle = compute_angle(p(-1e8, 1e-8), p(0.0, 0.0), p(1e8, -1e-8));
        assert!(angle.is_finite());
        assert!((angle - 180.0).abs() < 1e-3);
    }
}
