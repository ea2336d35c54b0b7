//! Landmark set for one frame
//!
//! Receives MediaPipe Pose landmarks as a flat array from JavaScript and
//! exposes them by anatomical index.

use thiserror::Error;

use crate::geometry::Point2D;

// ============================================================================
// LANDMARK INDICES (MediaPipe Pose - 33 total)
// ============================================================================

pub const POSE_LANDMARK_COUNT: usize = 33;

pub const LEFT_EAR: usize = 7;
pub const RIGHT_EAR: usize = 8;
pub const LEFT_SHOULDER: usize = 11;
pub const RIGHT_SHOULDER: usize = 12;
pub const LEFT_ELBOW: usize = 13;
pub const LEFT_WRIST: usize = 15;
pub const LEFT_HIP: usize = 23;
pub const RIGHT_HIP: usize = 24;
pub const LEFT_KNEE: usize = 25;
pub const LEFT_ANKLE: usize = 27;

/// Landmarks the two-signal rule cannot run without
pub const REQUIRED_LANDMARKS: [usize; 6] = [
    LEFT_EAR, RIGHT_EAR,
    LEFT_SHOULDER, RIGHT_SHOULDER,
    LEFT_HIP, RIGHT_HIP,
];

/// Extra landmarks needed for the five joint angles
pub const JOINT_LANDMARKS: [usize; 4] = [LEFT_ELBOW, LEFT_WRIST, LEFT_KNEE, LEFT_ANKLE];

// ============================================================================
// LANDMARK DATA STRUCTURE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LandmarkError {
    #[error("unsupported landmark stride {0} (expected 3 or 4)")]
    Stride(usize),

    #[error("landmark data length {len} is not a multiple of stride {stride}")]
    Length { len: usize, stride: usize },
}

/// A single landmark (normalized coordinates)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Landmark {
    pub x: f64,
    pub y: f64,
    /// Relative depth, ignored by the angle engine
    pub z: f64,
    /// Detection visibility when the page sends it, ignored by the angle engine
    pub visibility: Option<f64>,
}

impl Landmark {
    pub fn point(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }
}

/// Landmarks for one frame, indexed by MediaPipe numbering
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LandmarkSet {
    landmarks: Vec<Landmark>,
}

impl LandmarkSet {
    pub fn new(landmarks: Vec<Landmark>) -> Self {
        Self { landmarks }
    }

    /// Build from a flat array: `[x, y, z]` or `[x, y, z, visibility]` per landmark
    ///
    /// An empty array is a frame with no pose detected.
    pub fn from_flat(data: &[f64], stride: usize) -> Result<Self, LandmarkError> {
        if stride != 3 && stride != 4 {
            return Err(LandmarkError::Stride(stride));
        }
        if data.len() % stride != 0 {
            return Err(LandmarkError::Length { len: data.len(), stride });
        }

        let landmarks = data
            .chunks_exact(stride)
            .map(|chunk| Landmark {
                x: chunk[0],
                y: chunk[1],
                z: chunk[2],
                visibility: chunk.get(3).copied(),
            })
            .collect();

        Ok(Self { landmarks })
    }

    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    /// 2D point for `index`, or None if absent or not a finite coordinate
    pub fn point(&self, index: usize) -> Option<Point2D> {
        self.landmarks
            .get(index)
            .map(Landmark::point)
            .filter(Point2D::is_finite)
    }

    /// First required index that `point` cannot supply
    pub fn first_missing(&self, indices: &[usize]) -> Option<usize> {
        indices.iter().copied().find(|&i| self.point(i).is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(count: usize, stride: usize) -> Vec<f64> {
        (0..count * stride).map(|i| i as f64 * 0.001).collect()
    }

    #[test]
    fn test_from_flat_xyz() {
        let set = LandmarkSet::from_flat(&flat(POSE_LANDMARK_COUNT, 3), 3).unwrap();
        assert_eq!(set.len(), POSE_LANDMARK_COUNT);
        let ear = set.point(LEFT_EAR).unwrap();
        assert!((ear.x - 0.021).abs() < 1e-12);
        assert!((ear.y - 0.022).abs() < 1e-12);
        assert_eq!(set.first_missing(&REQUIRED_LANDMARKS), None);
    }

    #[test]
    fn test_from_flat_with_visibility() {
        let set = LandmarkSet::from_flat(&[0.1, 0.2, 0.0, 0.9, 0.3, 0.4, 0.0, 0.5], 4).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.landmarks[1].visibility, Some(0.5));
    }

    #[test]
    fn test_bad_shapes_rejected() {
        assert_eq!(LandmarkSet::from_flat(&[0.0; 6], 2), Err(LandmarkError::Stride(2)));
        assert_eq!(
            LandmarkSet::from_flat(&[0.0; 7], 3),
            Err(LandmarkError::Length { len: 7, stride: 3 })
        );
    }

    #[test]
    fn test_empty_frame_misses_first_required() {
        let set = LandmarkSet::from_flat(&[], 3).unwrap();
        assert!(set.is_empty());
        assert_eq!(set.first_missing(&REQUIRED_LANDMARKS), Some(LEFT_EAR));
    }

    #[test]
    fn test_short_frame_misses_hips() {
        let set = LandmarkSet::from_flat(&flat(20, 3), 3).unwrap();
        assert_eq!(set.first_missing(&REQUIRED_LANDMARKS), Some(LEFT_HIP));
    }

    #[test]
    fn test_nan_coordinate_counts_as_missing() {
        let mut data = flat(POSE_LANDMARK_COUNT, 3);
        data[RIGHT_SHOULDER * 3 + 1] = f64::NAN;
        let set = LandmarkSet::from_flat(&data, 3).unwrap();
        assert_eq!(set.point(RIGHT_SHOULDER), None);
        assert_eq!(set.first_missing(&REQUIRED_LANDMARKS), Some(RIGHT_SHOULDER));
    }
}
