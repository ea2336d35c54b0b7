//! Session timer driven by caller-supplied timestamps (milliseconds)

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SessionTimer {
    /// Time banked by previous start/pause spans
    accumulated_ms: f64,
    /// Start of the current span, if running
    running_since: Option<f64>,
}

impl SessionTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from a saved whole-second count (e.g. after a page reload)
    pub fn restored(seconds: u64) -> Self {
        Self {
            accumulated_ms: seconds as f64 * 1000.0,
            running_since: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running_since.is_some()
    }

    pub fn start(&mut self, now_ms: f64) {
        if self.running_since.is_none() {
            self.running_since = Some(now_ms);
        }
    }

    pub fn pause(&mut self, now_ms: f64) {
        if let Some(since) = self.running_since.take() {
            self.accumulated_ms += (now_ms - since).max(0.0);
        }
    }

    pub fn elapsed_ms(&self, now_ms: f64) -> f64 {
        let running = self
            .running_since
            .map_or(0.0, |since| (now_ms - since).max(0.0));
        self.accumulated_ms + running
    }

    /// Whole seconds elapsed
    pub fn elapsed_seconds(&self, now_ms: f64) -> u64 {
        (self.elapsed_ms(now_ms) / 1000.0).floor() as u64
    }

    /// Zero the elapsed time; a running timer keeps running from `now_ms`
    pub fn reset(&mut self, now_ms: f64) {
        self.accumulated_ms = 0.0;
        self.running_since = self.running_since.map(|_| now_ms);
    }
}

/// `HH:MM:SS` for the live session clock
pub fn format_clock(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}

/// `Xm Ys` for session history rows
pub fn format_duration(seconds: u64) -> String {
    format!("{}m {}s", seconds / 60, seconds % 60)
}
