//! Audio alert pacing
//!
//! Decides when the page should play the bad-posture sound. Playback
//! itself stays in JavaScript.

use crate::classifier::{ConfigError, PostureStatus};

pub const MIN_ALERT_INTERVAL_SECS: u32 = 5;
pub const MAX_ALERT_INTERVAL_SECS: u32 = 60;
pub const ALERT_INTERVAL_STEP_SECS: u32 = 5;
pub const DEFAULT_ALERT_INTERVAL_SECS: u32 = 10;

/// Slider range 5-60s in 5s steps
pub fn validate_alert_interval(secs: u32) -> Result<u32, ConfigError> {
    if (MIN_ALERT_INTERVAL_SECS..=MAX_ALERT_INTERVAL_SECS).contains(&secs)
        && secs % ALERT_INTERVAL_STEP_SECS == 0
    {
        Ok(secs)
    } else {
        Err(ConfigError::AlertInterval(secs))
    }
}

/// Cooldown between alerts for bad frames
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AlertPacer {
    enabled: bool,
    interval_secs: u32,
    last_alert_ms: Option<f64>,
}

impl AlertPacer {
    pub fn new(enabled: bool, interval_secs: u32) -> Result<Self, ConfigError> {
        Ok(Self {
            enabled,
            interval_secs: validate_alert_interval(interval_secs)?,
            last_alert_ms: None,
        })
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn interval_secs(&self) -> u32 {
        self.interval_secs
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn set_interval(&mut self, secs: u32) -> Result<(), ConfigError> {
        self.interval_secs = validate_alert_interval(secs)?;
        Ok(())
    }

    /// True (and starts a new cooldown) if an alert should play now
    pub fn should_alert(&mut self, status: PostureStatus, now_ms: f64) -> bool {
        if !self.enabled || status != PostureStatus::Bad {
            return false;
        }

        let interval_ms = self.interval_secs as f64 * 1000.0;
        if let Some(last) = self.last_alert_ms {
            if now_ms - last < interval_ms {
                return false;
            }
        }

        self.last_alert_ms = Some(now_ms);
        true
    }

    pub fn reset(&mut self) {
        self.last_alert_ms = None;
    }
}

impl Default for AlertPacer {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_secs: DEFAULT_ALERT_INTERVAL_SECS,
            last_alert_ms: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_bad_frames_alert() {
        let mut pacer = AlertPacer::default();
        assert!(!pacer.should_alert(PostureStatus::Good, 0.0));
        assert!(!pacer.should_alert(PostureStatus::Okay, 0.0));
        assert!(!pacer.should_alert(PostureStatus::Checking, 0.0));
        assert!(pacer.should_alert(PostureStatus::Bad, 0.0));
    }

    #[test]
    fn test_interval_respected() {
        let mut pacer = AlertPacer::new(true, 10).unwrap();
        assert!(pacer.should_alert(PostureStatus::Bad, 1_000.0));
        assert!(!pacer.should_alert(PostureStatus::Bad, 5_000.0));
        assert!(!pacer.should_alert(PostureStatus::Bad, 10_999.0));
        assert!(pacer.should_alert(PostureStatus::Bad, 11_000.0));
    }

    #[test]
    fn test_disabled_never_alerts() {
        let mut pacer = AlertPacer::new(false, 5).unwrap();
        assert!(!pacer.should_alert(PostureStatus::Bad, 0.0));
        pacer.set_enabled(true);
        assert!(pacer.should_alert(PostureStatus::Bad, 0.0));
    }

    #[test]
    fn test_reset_clears_cooldown() {
        let mut pacer = AlertPacer::default();
        assert!(pacer.should_alert(PostureStatus::Bad, 0.0));
        pacer.reset();
        assert!(pacer.should_alert(PostureStatus::Bad, 1.0));
    }

    #[test]
    fn test_interval_validation() {
        assert!(validate_alert_interval(5).is_ok());
        assert!(validate_alert_interval(60).is_ok());
        assert_eq!(validate_alert_interval(0), Err(ConfigError::AlertInterval(0)));
        assert_eq!(validate_alert_interval(12), Err(ConfigError::AlertInterval(12)));
        assert_eq!(validate_alert_interval(65), Err(ConfigError::AlertInterval(65)));

        let mut pacer = AlertPacer::default();
        assert!(pacer.set_interval(7).is_err());
        assert_eq!(pacer.interval_secs(), DEFAULT_ALERT_INTERVAL_SECS);
    }
}
