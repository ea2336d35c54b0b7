//! Five-angle voting classifier
//!
//! Scores shoulder, elbow, hip, knee and neck angles against a "good"
//! band and a "bad" band. Three votes either way decide the label.
//! Needs limb landmarks, so it only has something to vote on when the
//! frame analyzer could extract `JointAngles`.

use serde::{Deserialize, Serialize};

use super::rules::PostureClassifier;
use super::signals::PostureAngles;
use super::status::PostureStatus;

/// Votes needed for good or bad
pub const VOTES_TO_DECIDE: usize = 3;

/// Inclusive angle band in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleBand {
    pub min: f64,
    pub max: f64,
}

impl AngleBand {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, angle: f64) -> bool {
        angle >= self.min && angle <= self.max
    }
}

/// Good and bad bands for one joint
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JointRange {
    pub good: AngleBand,
    pub bad: AngleBand,
}

/// Bands for all five joints, seated desk posture
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JointRanges {
    pub shoulder: JointRange,
    pub elbow: JointRange,
    pub hip: JointRange,
    pub knee: JointRange,
    pub neck: JointRange,
}

impl JointRanges {
    fn as_array(&self) -> [JointRange; 5] {
        [self.shoulder, self.elbow, self.hip, self.knee, self.neck]
    }
}

impl Default for JointRanges {
    fn default() -> Self {
        Self {
            shoulder: JointRange {
                good: AngleBand::new(0.0, 35.0),
                bad: AngleBand::new(60.0, 180.0),
            },
            elbow: JointRange {
                good: AngleBand::new(80.0, 120.0),
                bad: AngleBand::new(0.0, 60.0),
            },
            hip: JointRange {
                good: AngleBand::new(85.0, 115.0),
                bad: AngleBand::new(0.0, 75.0),
            },
            knee: JointRange {
                good: AngleBand::new(80.0, 120.0),
                bad: AngleBand::new(0.0, 60.0),
            },
            neck: JointRange {
                good: AngleBand::new(160.0, 180.0),
                bad: AngleBand::new(0.0, 140.0),
            },
        }
    }
}

/// Voting classifier over `PostureAngles::joints`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct JointVoteClassifier {
    ranges: JointRanges,
}

impl JointVoteClassifier {
    pub fn new(ranges: JointRanges) -> Self {
        Self { ranges }
    }

    /// (good votes, bad votes); missing angles vote for neither
    pub fn tally(&self, angles: &PostureAngles) -> (usize, usize) {
        let Some(joints) = angles.joints else {
            return (0, 0);
        };

        joints
            .as_array()
            .iter()
            .zip(self.ranges.as_array())
            .filter_map(|(angle, range)| angle.map(|a| (a, range)))
            .fold((0, 0), |(good, bad), (angle, range)| {
                (
                    good + range.good.contains(angle) as usize,
                    bad + range.bad.contains(angle) as usize,
                )
            })
    }
}

impl PostureClassifier for JointVoteClassifier {
    fn classify(&self, angles: &PostureAngles) -> PostureStatus {
        let (good, bad) = self.tally(angles);
        // Good wins if overlapping custom bands give both three votes
        if good >= VOTES_TO_DECIDE {
            PostureStatus::Good
        } else if bad >= VOTES_TO_DECIDE {
            PostureStatus::Bad
        } else {
            PostureStatus::Okay
        }
    }
}
