//! Rolling window of recent angle samples for the live chart
//!
//! Keeps the newest `CHART_WINDOW` samples in a fixed ring.

use serde::Serialize;

use crate::classifier::{PostureAngles, PostureStatus};

/// Number of samples the angle chart shows
pub const CHART_WINDOW: usize = 20;

/// One chart point (angles already rounded for display)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AngleSample {
    pub timestamp: f64,
    pub neck: f64,
    pub shoulder: f64,
    pub back: f64,
    pub status: PostureStatus,
}

impl AngleSample {
    pub fn new(timestamp: f64, angles: &PostureAngles, status: PostureStatus) -> Self {
        let [neck, shoulder, back] = angles.display();
        Self {
            timestamp,
            neck,
            shoulder,
            back,
            status,
        }
    }
}

/// Ring buffer that returns samples in chronological order
pub struct AngleHistory {
    data: [AngleSample; CHART_WINDOW],

    /// Current write position (points to next slot to write)
    write_index: usize,

    /// Whether buffer has wrapped at least once
    filled: bool,
}

impl AngleHistory {
    pub fn new() -> Self {
        Self {
            data: [AngleSample::default(); CHART_WINDOW],
            write_index: 0,
            filled: false,
        }
    }

    pub fn push(&mut self, sample: AngleSample) {
        self.data[self.write_index] = sample;
        self.write_index = (self.write_index + 1) % CHART_WINDOW;

        if self.write_index == 0 {
            self.filled = true;
        }
    }

    pub fn len(&self) -> usize {
        if self.filled {
            CHART_WINDOW
        } else {
            self.write_index
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn latest(&self) -> Option<&AngleSample> {
        if self.is_empty() {
            return None;
        }
        let idx = (self.write_index + CHART_WINDOW - 1) % CHART_WINDOW;
        Some(&self.data[idx])
    }

    /// Oldest to newest
    pub fn samples(&self) -> Vec<AngleSample> {
        if !self.filled {
            return self.data[..self.write_index].to_vec();
        }

        let mut result = Vec::with_capacity(CHART_WINDOW);
        result.extend_from_slice(&self.data[self.write_index..]);
        result.extend_from_slice(&self.data[..self.write_index]);
        result
    }

    /// Chart data as a JSON array for the page
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.samples())
    }

    pub fn clear(&mut self) {
        self.data = [AngleSample::default(); CHART_WINDOW];
        self.write_index = 0;
        self.filled = false;
    }
}

impl Default for AngleHistory {
    fn default() -> Self {
        Self::new()
    }
}
