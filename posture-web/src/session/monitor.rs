//! Caller-owned monitoring session
//!
//! Wraps the stateless frame analyzer with everything the page keeps
//! between frames: displayed status and angles, counters, timer, alert
//! cooldown, chart window and finished-session history.

use std::str::FromStr;

use super::alerts::AlertPacer;
use super::angle_history::{AngleHistory, AngleSample};
use super::history::{SessionHistory, SessionSummary};
use super::settings::MonitorSettings;
use super::stats::SessionStats;
use super::timer::SessionTimer;
use crate::analyzer::{analyze_frame_with, AnalysisError, LandmarkSet};
use crate::classifier::{
    ClassificationConfig, ConfigError, JointVoteClassifier, NeckAwareClassifier, PostureAngles,
    PostureStatus, Sensitivity, ThresholdClassifier, DEFAULT_NECK_MAX,
};

/// Which classification rule the monitor runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ClassifierRule {
    /// Back angle + shoulder level (default)
    #[default]
    Threshold,
    /// Five-angle vote; needs limb landmarks
    JointVote,
    /// Back + shoulder + neck angle
    NeckAware,
}

impl FromStr for ClassifierRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "threshold" => Ok(ClassifierRule::Threshold),
            "joint-vote" => Ok(ClassifierRule::JointVote),
            "neck-aware" => Ok(ClassifierRule::NeckAware),
            other => Err(format!("unknown classifier rule '{other}'")),
        }
    }
}

/// Result of feeding one frame to the monitor
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameOutcome {
    Classified {
        status: PostureStatus,
        /// Page should play the alert sound now
        alert: bool,
    },
    /// Frame dropped; displayed values unchanged
    Skipped(AnalysisError),
    /// Back or neck angle had a zero-length ray; dropped like `Skipped`
    Degenerate,
}

pub struct Monitor {
    settings: MonitorSettings,
    config: ClassificationConfig,
    rule: ClassifierRule,

    status: PostureStatus,
    angles: Option<PostureAngles>,

    stats: SessionStats,
    timer: SessionTimer,
    pacer: AlertPacer,
    chart: AngleHistory,
    sessions: SessionHistory,

    skipped_frames: u32,
    degenerate_frames: u32,
}

impl Monitor {
    pub fn new(settings: MonitorSettings) -> Result<Self, ConfigError> {
        settings.validate()?;
        Ok(Self {
            settings,
            config: settings.sensitivity.config(),
            rule: ClassifierRule::default(),
            status: PostureStatus::Checking,
            angles: None,
            stats: SessionStats::new(),
            timer: SessionTimer::new(),
            pacer: AlertPacer::new(settings.audio_enabled, settings.alert_interval_secs)?,
            chart: AngleHistory::new(),
            sessions: SessionHistory::new(),
            skipped_frames: 0,
            degenerate_frames: 0,
        })
    }

    // ------------------------------------------------------------------
    // Settings
    // ------------------------------------------------------------------

    pub fn settings(&self) -> MonitorSettings {
        self.settings
    }

    pub fn apply_settings(&mut self, settings: MonitorSettings) -> Result<(), ConfigError> {
        settings.validate()?;
        self.pacer.set_interval(settings.alert_interval_secs)?;
        self.pacer.set_enabled(settings.audio_enabled);
        self.set_sensitivity(settings.sensitivity);
        self.settings = settings;
        Ok(())
    }

    /// Select a tier; replaces any custom thresholds
    pub fn set_sensitivity(&mut self, sensitivity: Sensitivity) {
        self.settings.sensitivity = sensitivity;
        self.config = sensitivity.config();
    }

    pub fn set_custom_config(&mut self, config: ClassificationConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn config(&self) -> &ClassificationConfig {
        &self.config
    }

    pub fn set_rule(&mut self, rule: ClassifierRule) {
        self.rule = rule;
    }

    pub fn rule(&self) -> ClassifierRule {
        self.rule
    }

    pub fn set_audio_enabled(&mut self, enabled: bool) {
        self.settings.audio_enabled = enabled;
        self.pacer.set_enabled(enabled);
    }

    pub fn set_alert_interval(&mut self, secs: u32) -> Result<(), ConfigError> {
        self.pacer.set_interval(secs)?;
        self.settings.alert_interval_secs = secs;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Per-frame
    // ------------------------------------------------------------------

    /// Analyze one frame and update the session
    ///
    /// Missing landmarks or a degenerate back/neck angle skip the frame:
    /// status, angles, counters, chart and alert cooldown are left as they
    /// were.
    pub fn process_frame(&mut self, landmarks: &LandmarkSet, now_ms: f64) -> FrameOutcome {
        let result = match self.rule {
            ClassifierRule::Threshold => {
                analyze_frame_with(landmarks, &ThresholdClassifier::new(self.config))
            }
            ClassifierRule::JointVote => {
                analyze_frame_with(landmarks, &JointVoteClassifier::default())
            }
            ClassifierRule::NeckAware => analyze_frame_with(
                landmarks,
                &NeckAwareClassifier::new(self.config, DEFAULT_NECK_MAX),
            ),
        };

        match result {
            Ok((angles, _)) if angles.degenerate => {
                self.degenerate_frames += 1;
                FrameOutcome::Degenerate
            }
            Ok((angles, status)) => {
                self.angles = Some(angles);
                self.chart.push(AngleSample::new(now_ms, &angles, status));
                let alert = self.record_frame(status, now_ms);
                FrameOutcome::Classified { status, alert }
            }
            Err(err) => {
                self.skipped_frames += 1;
                FrameOutcome::Skipped(err)
            }
        }
    }

    /// Count a classified status; returns whether an alert is due
    pub fn record_frame(&mut self, status: PostureStatus, now_ms: f64) -> bool {
        if !status.is_classified() {
            return false;
        }
        self.status = status;
        self.stats.record(status);
        self.pacer.should_alert(status, now_ms)
    }

    // ------------------------------------------------------------------
    // Readouts
    // ------------------------------------------------------------------

    pub fn status(&self) -> PostureStatus {
        self.status
    }

    pub fn angles(&self) -> Option<&PostureAngles> {
        self.angles.as_ref()
    }

    /// `[neck, shoulder, back]` rounded to one decimal, zeros before the first frame
    pub fn display_angles(&self) -> [f64; 3] {
        self.angles.map_or([0.0; 3], |a| a.display())
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn chart(&self) -> &AngleHistory {
        &self.chart
    }

    pub fn sessions(&self) -> &SessionHistory {
        &self.sessions
    }

    pub fn skipped_frames(&self) -> u32 {
        self.skipped_frames
    }

    pub fn degenerate_frames(&self) -> u32 {
        self.degenerate_frames
    }

    // ------------------------------------------------------------------
    // Session lifecycle
    // ------------------------------------------------------------------

    pub fn start(&mut self, now_ms: f64) {
        self.timer.start(now_ms);
    }

    pub fn pause(&mut self, now_ms: f64) {
        self.timer.pause(now_ms);
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_running()
    }

    pub fn elapsed_seconds(&self, now_ms: f64) -> u64 {
        self.timer.elapsed_seconds(now_ms)
    }

    /// Continue a timer saved before a page reload
    pub fn restore_elapsed(&mut self, seconds: u64) {
        self.timer = SessionTimer::restored(seconds);
    }

    /// Clear counters, timer, cooldown and chart. Status stays as displayed
    /// and a running timer keeps running from `now_ms`.
    pub fn reset_session(&mut self, now_ms: f64) {
        self.stats.reset();
        self.timer.reset(now_ms);
        self.pacer.reset();
        self.chart.clear();
        self.skipped_frames = 0;
        self.degenerate_frames = 0;
    }

    /// Close the session into a history entry and start a fresh one
    pub fn finish_session(&mut self, now_ms: f64, date: &str) -> SessionSummary {
        let percentages = self.stats.percentages();
        let summary = SessionSummary {
            id: format!("{}", now_ms.max(0.0) as u64),
            date: date.to_string(),
            duration: self.timer.elapsed_seconds(now_ms),
            good_percentage: percentages.good,
            bad_percentage: percentages.bad,
        };
        self.sessions.push(summary.clone());
        self.reset_session(now_ms);
        summary
    }

    pub fn load_sessions(&mut self, sessions: SessionHistory) {
        self.sessions = sessions;
    }

    pub fn clear_sessions(&mut self) {
        self.sessions.clear();
    }
}

impl Default for Monitor {
    fn default() -> Self {
        Self {
            settings: MonitorSettings::default(),
            config: ClassificationConfig::default(),
            rule: ClassifierRule::default(),
            status: PostureStatus::Checking,
            angles: None,
            stats: SessionStats::new(),
            timer: SessionTimer::new(),
            pacer: AlertPacer::default(),
            chart: AngleHistory::new(),
            sessions: SessionHistory::new(),
            skipped_frames: 0,
            degenerate_frames: 0,
        }
    }
}
