//! Per-session good / okay / bad frame counters

use serde::Serialize;

use crate::classifier::PostureStatus;
use crate::geometry::js_round;

/// Whole-number share of each label, as shown on the summary cards
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct StatusPercentages {
    pub good: u32,
    pub okay: u32,
    pub bad: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SessionStats {
    pub good: u32,
    pub okay: u32,
    pub bad: u32,
}

impl SessionStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one classified frame. `Checking` is not a frame result and is ignored.
    pub fn record(&mut self, status: PostureStatus) {
        match status {
            PostureStatus::Good => self.good += 1,
            PostureStatus::Okay => self.okay += 1,
            PostureStatus::Bad => self.bad += 1,
            PostureStatus::Checking => {}
        }
    }

    pub fn total(&self) -> u32 {
        self.good + self.okay + self.bad
    }

    /// `Math.round(count / total * 100)` per label, 0 with no frames
    pub fn percentages(&self) -> StatusPercentages {
        let total = self.total();
        let pct = |count: u32| {
            if total == 0 {
                0
            } else {
                js_round(count as f64 / total as f64 * 100.0) as u32
            }
        };
        StatusPercentages {
            good: pct(self.good),
            okay: pct(self.okay),
            bad: pct(self.bad),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_counts() {
        let mut stats = SessionStats::new();
        for status in [
            PostureStatus::Good,
            PostureStatus::Good,
            PostureStatus::Okay,
            PostureStatus::Bad,
            PostureStatus::Checking,
        ] {
            stats.record(status);
        }
        assert_eq!((stats.good, stats.okay, stats.bad), (2, 1, 1));
        assert_eq!(stats.total(), 4);
    }

    #[test]
    fn test_percentages_round_like_js() {
        let stats = SessionStats { good: 1, okay: 1, bad: 1 };
        // 33.33 each
        assert_eq!(stats.percentages(), StatusPercentages { good: 33, okay: 33, bad: 33 });

        let stats = SessionStats { good: 1, okay: 0, bad: 7 };
        // 12.5 rounds up, 87.5 rounds up
        assert_eq!(stats.percentages(), StatusPercentages { good: 13, okay: 0, bad: 88 });
    }

    #[test]
    fn test_percentages_empty() {
        assert_eq!(SessionStats::new().percentages(), StatusPercentages::default());
    }

    #[test]
    fn test_reset() {
        let mut stats = SessionStats { good: 3, okay: 2, bad: 1 };
        stats.reset();
        assert_eq!(stats.total(), 0);
    }
}
