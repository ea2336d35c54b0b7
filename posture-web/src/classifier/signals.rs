//! Angle signals the classifiers read

use serde::Serialize;

use crate::geometry::round_tenth;

/// Per-frame output of the frame analyzer
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostureAngles {
    /// Angle at the shoulder midpoint between ear and hip midpoints (degrees)
    pub back_angle: f64,
    /// |left shoulder y - right shoulder y| scaled by 100 (not an angle)
    pub shoulder_level: f64,
    /// Angle at the ear midpoint between the two shoulders (degrees)
    pub neck_angle: f64,
    /// Back or neck angle hit the zero-length-ray sentinel this frame
    pub degenerate: bool,
    /// Limb angles, present only when elbow/wrist/knee/ankle were detected
    pub joints: Option<JointAngles>,
}

impl PostureAngles {
    pub fn new(back_angle: f64, shoulder_level: f64, neck_angle: f64) -> Self {
        Self {
            back_angle,
            shoulder_level,
            neck_angle,
            degenerate: false,
            joints: None,
        }
    }

    pub fn with_joints(mut self, joints: JointAngles) -> Self {
        self.joints = Some(joints);
        self
    }

    /// `[neck, shoulder, back]` rounded to one decimal for the readouts
    pub fn display(&self) -> [f64; 3] {
        [
            round_tenth(self.neck_angle),
            round_tenth(self.shoulder_level),
            round_tenth(self.back_angle),
        ]
    }
}

/// Five joint angles (left side) used by the voting classifier
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct JointAngles {
    /// Elbow-shoulder-hip, vertex at shoulder
    pub shoulder: Option<f64>,
    /// Shoulder-elbow-wrist, vertex at elbow
    pub elbow: Option<f64>,
    /// Shoulder-hip-knee, vertex at hip
    pub hip: Option<f64>,
    /// Hip-knee-ankle, vertex at knee
    pub knee: Option<f64>,
    /// Ear-shoulder-hip, vertex at shoulder
    pub neck: Option<f64>,
}

impl JointAngles {
    /// Angles in voting order: shoulder, elbow, hip, knee, neck
    pub fn as_array(&self) -> [Option<f64>; 5] {
        [self.shoulder, self.elbow, self.hip, self.knee, self.neck]
    }

    pub fn available(&self) -> usize {
        self.as_array().iter().filter(|a| a.is_some()).count()
    }
}
