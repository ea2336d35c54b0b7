//! Analyzer module - landmark extraction and per-frame composition
//!
//! Re-exports only. All logic in submodules.

mod landmarks;
mod frame;

pub use landmarks::{
    Landmark, LandmarkSet, LandmarkError,
    // Constants
    POSE_LANDMARK_COUNT, REQUIRED_LANDMARKS, JOINT_LANDMARKS,
    LEFT_EAR, RIGHT_EAR, LEFT_SHOULDER, RIGHT_SHOULDER,
    LEFT_ELBOW, LEFT_WRIST, LEFT_HIP, RIGHT_HIP, LEFT_KNEE, LEFT_ANKLE,
};
pub use frame::{analyze_frame, analyze_frame_with, extract_angles, AnalysisError, SHOULDER_LEVEL_SCALE};

#[cfg(test)]
pub(crate) use frame::fixtures;
