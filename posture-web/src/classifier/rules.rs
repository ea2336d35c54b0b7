//! Two-signal threshold rule and the classifier capability trait

use super::config::ClassificationConfig;
use super::signals::PostureAngles;
use super::status::PostureStatus;

/// Maps one frame's angles to good / okay / bad
///
/// Implementations are pure: no counters, no history, no alerts.
pub trait PostureClassifier {
    fn classify(&self, angles: &PostureAngles) -> PostureStatus;
}

/// Canonical two-signal rule: back angle and shoulder level
///
/// - good: back >= good_back_min AND shoulder < good_shoulder_max
/// - okay: back >= okay_back_min AND shoulder < okay_shoulder_max
/// - bad: otherwise (including NaN input)
pub fn classify(angles: &PostureAngles, config: &ClassificationConfig) -> PostureStatus {
    let back = angles.back_angle;
    let shoulder = angles.shoulder_level;

    if back >= config.good_back_min && shoulder < config.good_shoulder_max {
        PostureStatus::Good
    } else if back >= config.okay_back_min && shoulder < config.okay_shoulder_max {
        PostureStatus::Okay
    } else {
        PostureStatus::Bad
    }
}

/// `PostureClassifier` wrapper around `classify` with a fixed config
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ThresholdClassifier {
    config: ClassificationConfig,
}

impl ThresholdClassifier {
    pub fn new(config: ClassificationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassificationConfig {
        &self.config
    }
}

impl PostureClassifier for ThresholdClassifier {
    fn classify(&self, angles: &PostureAngles) -> PostureStatus {
        classify(angles, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::Sensitivity;

    fn frame(back: f64, shoulder: f64) -> PostureAngles {
        PostureAngles::new(back, shoulder, 60.0)
    }

    #[test]
    fn test_normal_boundaries() {
        let config = Sensitivity::Normal.config();
        assert_eq!(classify(&frame(155.0, 3.9), &config), PostureStatus::Good);
        assert_eq!(classify(&frame(154.9, 3.9), &config), PostureStatus::Okay);
        assert_eq!(classify(&frame(100.0, 10.0), &config), PostureStatus::Bad);
    }

    #[test]
    fn test_shoulder_bound_is_exclusive() {
        let config = Sensitivity::Normal.config();
        assert_eq!(classify(&frame(170.0, 4.0), &config), PostureStatus::Okay);
        assert_eq!(classify(&frame(170.0, 7.0), &config), PostureStatus::Bad);
        assert_eq!(classify(&frame(135.0, 6.99), &config), PostureStatus::Okay);
        assert_eq!(classify(&frame(134.99, 0.0), &config), PostureStatus::Bad);
    }

    #[test]
    fn test_total_over_grid() {
        let config = Sensitivity::Normal.config();
        let mut seen = [0usize; 3];
        for b in 0..=400 {
            for s in 0..=60 {
                let back = b as f64 * 0.5 - 10.0;
                let shoulder = s as f64 * 0.25 - 1.0;
                let status = classify(&frame(back, shoulder), &config);
                assert!(status.is_classified());
                seen[status.index()] += 1;
            }
        }
        assert!(seen.iter().all(|&n| n > 0));
    }

    #[test]
    fn test_out_of_range_does_not_crash() {
        let config = Sensitivity::Normal.config();
        assert_eq!(classify(&frame(f64::NAN, 0.0), &config), PostureStatus::Bad);
        assert_eq!(classify(&frame(170.0, f64::NAN), &config), PostureStatus::Bad);
        assert_eq!(classify(&frame(1e9, -5.0), &config), PostureStatus::Good);
        assert_eq!(classify(&frame(f64::NEG_INFINITY, 0.0), &config), PostureStatus::Bad);
    }

    #[test]
    fn test_tiers_are_monotonic() {
        let strict = ThresholdClassifier::new(Sensitivity::Strict.config());
        let normal = ThresholdClassifier::new(Sensitivity::Normal.config());
        let relaxed = ThresholdClassifier::new(Sensitivity::Relaxed.config());

        let rank = |s: PostureStatus| match s {
            PostureStatus::Good => 2,
            PostureStatus::Okay => 1,
            _ => 0,
        };

        for b in 100..=180 {
            for s in 0..=40 {
                let angles = frame(b as f64, s as f64 * 0.25);
                let (st, no, re) = (
                    rank(strict.classify(&angles)),
                    rank(normal.classify(&angles)),
                    rank(relaxed.classify(&angles)),
                );
                assert!(st <= no && no <= re, "back {b} shoulder {}", s as f64 * 0.25);
            }
        }
    }

    #[test]
    fn test_trait_matches_free_function() {
        let config = Sensitivity::Relaxed.config();
        let classifier = ThresholdClassifier::new(config);
        let angles = frame(151.0, 4.5);
        assert_eq!(classifier.classify(&angles), classify(&angles, &config));
        assert_eq!(classifier.classify(&angles), PostureStatus::Good);
    }
}
