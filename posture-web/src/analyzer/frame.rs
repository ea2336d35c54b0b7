//! Frame analysis: landmarks → angles → status
//!
//! Stateless. Each call depends only on its landmark input and the
//! classifier it is given.

use thiserror::Error;

use super::landmarks::*;
use crate::classifier::{
    ClassificationConfig, JointAngles, PostureAngles, PostureClassifier, PostureStatus,
    ThresholdClassifier,
};
use crate::geometry::{midpoint, try_compute_angle, GeometryError, Point2D, DEGENERATE_ANGLE};

/// Shoulder y difference is scaled by this before classification
pub const SHOULDER_LEVEL_SCALE: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// Pose not detected or partially occluded this frame
    #[error("missing landmark {index}")]
    MissingLandmarks { index: usize },
}

/// Angle computation that records whether the sentinel was used
struct AngleProbe {
    degenerate: bool,
}

impl AngleProbe {
    fn angle(&mut self, a: Point2D, b: Point2D, c: Point2D) -> f64 {
        match try_compute_angle(a, b, c) {
            Ok(angle) => angle,
            Err(GeometryError::InvalidGeometry { .. }) => {
                self.degenerate = true;
                DEGENERATE_ANGLE
            }
        }
    }
}

/// `|left - right| × 100`, saturating instead of overflowing to infinity
fn shoulder_level(left: Point2D, right: Point2D) -> f64 {
    let half_diff = (left.y / 2.0 - right.y / 2.0).abs();
    (half_diff * 2.0 * SHOULDER_LEVEL_SCALE).min(f64::MAX)
}

/// Compute the per-frame angle record
///
/// - back: vertex shoulder midpoint, rays to ear midpoint and hip midpoint
/// - neck: vertex ear midpoint, rays to the raw left and right shoulders
/// - shoulder level: |left y - right y| × 100
///
/// `degenerate` reflects the back and neck angles only. A collapsed limb
/// leaves that joint angle out instead.
pub fn extract_angles(landmarks: &LandmarkSet) -> Result<PostureAngles, AnalysisError> {
    if let Some(index) = landmarks.first_missing(&REQUIRED_LANDMARKS) {
        return Err(AnalysisError::MissingLandmarks { index });
    }
    let point = |index| {
        landmarks
            .point(index)
            .ok_or(AnalysisError::MissingLandmarks { index })
    };

    let left_shoulder = point(LEFT_SHOULDER)?;
    let right_shoulder = point(RIGHT_SHOULDER)?;
    let ear_mid = midpoint(point(LEFT_EAR)?, point(RIGHT_EAR)?);
    let shoulder_mid = midpoint(left_shoulder, right_shoulder);
    let hip_mid = midpoint(point(LEFT_HIP)?, point(RIGHT_HIP)?);

    let mut probe = AngleProbe { degenerate: false };
    let back_angle = probe.angle(ear_mid, shoulder_mid, hip_mid);
    let neck_angle = probe.angle(left_shoulder, ear_mid, right_shoulder);
    let joints = extract_joint_angles(landmarks);

    Ok(PostureAngles {
        back_angle,
        shoulder_level: shoulder_level(left_shoulder, right_shoulder),
        neck_angle,
        degenerate: probe.degenerate,
        joints,
    })
}

/// Left-side limb angles; None unless every limb landmark is present
fn extract_joint_angles(landmarks: &LandmarkSet) -> Option<JointAngles> {
    if landmarks.first_missing(&JOINT_LANDMARKS).is_some() {
        return None;
    }

    let ear = landmarks.point(LEFT_EAR)?;
    let shoulder = landmarks.point(LEFT_SHOULDER)?;
    let elbow = landmarks.point(LEFT_ELBOW)?;
    let wrist = landmarks.point(LEFT_WRIST)?;
    let hip = landmarks.point(LEFT_HIP)?;
    let knee = landmarks.point(LEFT_KNEE)?;
    let ankle = landmarks.point(LEFT_ANKLE)?;

    Some(JointAngles {
        shoulder: try_compute_angle(elbow, shoulder, hip).ok(),
        elbow: try_compute_angle(shoulder, elbow, wrist).ok(),
        hip: try_compute_angle(shoulder, hip, knee).ok(),
        knee: try_compute_angle(hip, knee, ankle).ok(),
        neck: try_compute_angle(ear, shoulder, hip).ok(),
    })
}

/// Analyze one frame with any classifier
pub fn analyze_frame_with<C: PostureClassifier + ?Sized>(
    landmarks: &LandmarkSet,
    classifier: &C,
) -> Result<(PostureAngles, PostureStatus), AnalysisError> {
    let angles = extract_angles(landmarks)?;
    let status = classifier.classify(&angles);
    Ok((angles, status))
}

/// Analyze one frame with the two-signal threshold rule
pub fn analyze_frame(
    landmarks: &LandmarkSet,
    config: &ClassificationConfig,
) -> Result<(PostureAngles, PostureStatus), AnalysisError> {
    analyze_frame_with(landmarks, &ThresholdClassifier::new(*config))
}
