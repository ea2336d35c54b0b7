//! Three-signal classifier folding the neck angle into the good-tier checks

use super::config::ClassificationConfig;
use super::rules::PostureClassifier;
use super::signals::PostureAngles;
use super::status::PostureStatus;

/// Default ceiling for the ear-midpoint neck angle (degrees)
///
/// The neck angle widens as the head drops toward the shoulder line.
pub const DEFAULT_NECK_MAX: f64 = 75.0;

/// Back, shoulder and neck checks: three pass = good, two = okay, else bad
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeckAwareClassifier {
    config: ClassificationConfig,
    neck_max: f64,
}

impl NeckAwareClassifier {
    pub fn new(config: ClassificationConfig, neck_max: f64) -> Self {
        Self { config, neck_max }
    }

    pub fn passed_checks(&self, angles: &PostureAngles) -> usize {
        [
            angles.back_angle >= self.config.good_back_min,
            angles.shoulder_level < self.config.good_shoulder_max,
            angles.neck_angle <= self.neck_max,
        ]
        .iter()
        .filter(|&&passed| passed)
        .count()
    }
}

impl Default for NeckAwareClassifier {
    fn default() -> Self {
        Self::new(ClassificationConfig::default(), DEFAULT_NECK_MAX)
    }
}

impl PostureClassifier for NeckAwareClassifier {
    fn classify(&self, angles: &PostureAngles) -> PostureStatus {
        match self.passed_checks(angles) {
            3 => PostureStatus::Good,
            2 => PostureStatus::Okay,
            _ => PostureStatus::Bad,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_checks_pass() {
        let classifier = NeckAwareClassifier::default();
        let angles = PostureAngles::new(170.0, 2.0, 60.0);
        assert_eq!(classifier.classify(&angles), PostureStatus::Good);
    }

    #[test]
    fn test_dropped_head_downgrades() {
        let classifier = NeckAwareClassifier::default();
        let angles = PostureAngles::new(170.0, 2.0, 95.0);
        assert_eq!(classifier.passed_checks(&angles), 2);
        assert_eq!(classifier.classify(&angles), PostureStatus::Okay);
    }

    #[test]
    fn test_one_or_no_checks_is_bad() {
        let classifier = NeckAwareClassifier::default();
        assert_eq!(
            classifier.classify(&PostureAngles::new(120.0, 9.0, 60.0)),
            PostureStatus::Bad
        );
        assert_eq!(
            classifier.classify(&PostureAngles::new(f64::NAN, f64::NAN, f64::NAN)),
            PostureStatus::Bad
        );
    }

    #[test]
    fn test_neck_bound_inclusive() {
        let classifier = NeckAwareClassifier::default();
        let angles = PostureAngles::new(170.0, 2.0, DEFAULT_NECK_MAX);
        assert_eq!(classifier.classify(&angles), PostureStatus::Good);
    }
}
