//! Classifier module - rule-based posture classification
//!
//! Classifiers take angles, never landmarks. The two-signal threshold
//! rule is the default; the voting and neck-aware rules plug in through
//! the same `PostureClassifier` trait.

mod status;
mod config;
mod signals;
mod rules;
mod joint_vote;
mod neck_aware;

pub use status::{PostureStatus, STATUS_LABELS};
pub use config::{ClassificationConfig, Sensitivity, ConfigError};
pub use signals::{PostureAngles, JointAngles};
pub use rules::{classify, PostureClassifier, ThresholdClassifier};
pub use joint_vote::{AngleBand, JointRange, JointRanges, JointVoteClassifier, VOTES_TO_DECIDE};
pub use neck_aware::{NeckAwareClassifier, DEFAULT_NECK_MAX};
