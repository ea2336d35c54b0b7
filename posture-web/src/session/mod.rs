//! Session module - state the page keeps between frames
//!
//! The analyzer is stateless; counters, timer, alert cooldown, chart
//! window and history all live here in an explicitly owned `Monitor`.

mod stats;
mod timer;
mod alerts;
mod angle_history;
mod history;
mod settings;
mod monitor;

pub use stats::{SessionStats, StatusPercentages};
pub use timer::{SessionTimer, format_clock, format_duration};
pub use alerts::{
    AlertPacer, validate_alert_interval,
    MIN_ALERT_INTERVAL_SECS, MAX_ALERT_INTERVAL_SECS, DEFAULT_ALERT_INTERVAL_SECS,
};
pub use angle_history::{AngleHistory, AngleSample, CHART_WINDOW};
pub use history::{SessionHistory, SessionSummary, HistoryError, MAX_SESSIONS};
pub use settings::MonitorSettings;
pub use monitor::{Monitor, ClassifierRule, FrameOutcome};
