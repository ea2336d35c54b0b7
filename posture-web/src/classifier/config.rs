//! Classification thresholds and sensitivity tiers
//!
//! Every threshold the two-signal rule reads lives in
//! `ClassificationConfig`. The three sensitivity tiers are the only
//! built-in sources of those numbers.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("threshold '{name}' must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error("okay band must be at least as lenient as good band ({0})")]
    BandsInverted(&'static str),

    #[error("unknown sensitivity level {0} (expected 1-3)")]
    UnknownSensitivity(u8),

    #[error("unknown sensitivity '{0}'")]
    UnknownSensitivityName(String),

    #[error("alert interval {0}s out of range (5-60s in steps of 5)")]
    AlertInterval(u32),

    #[error("invalid config JSON: {0}")]
    Json(String),
}

/// Threshold quadruple for the two-signal rule
///
/// Back angle bounds are inclusive minimums, shoulder bounds are
/// exclusive maximums.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationConfig {
    /// Minimum back angle (degrees) for "good"
    pub good_back_min: f64,
    /// Shoulder level must stay below this for "good"
    pub good_shoulder_max: f64,
    /// Minimum back angle (degrees) for "okay"
    pub okay_back_min: f64,
    /// Shoulder level must stay below this for "okay"
    pub okay_shoulder_max: f64,
}

impl ClassificationConfig {
    pub const STRICT: Self = Self {
        good_back_min: 160.0,
        good_shoulder_max: 3.0,
        okay_back_min: 140.0,
        okay_shoulder_max: 6.0,
    };

    pub const NORMAL: Self = Self {
        good_back_min: 155.0,
        good_shoulder_max: 4.0,
        okay_back_min: 135.0,
        okay_shoulder_max: 7.0,
    };

    pub const RELAXED: Self = Self {
        good_back_min: 150.0,
        good_shoulder_max: 5.0,
        okay_back_min: 130.0,
        okay_shoulder_max: 8.0,
    };

    /// Parse a custom threshold set supplied by the page
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Json(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("goodBackMin", self.good_back_min),
            ("goodShoulderMax", self.good_shoulder_max),
            ("okayBackMin", self.okay_back_min),
            ("okayShoulderMax", self.okay_shoulder_max),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { name, value });
            }
        }

        if self.okay_back_min > self.good_back_min {
            return Err(ConfigError::BandsInverted("okayBackMin > goodBackMin"));
        }
        if self.okay_shoulder_max < self.good_shoulder_max {
            return Err(ConfigError::BandsInverted("okayShoulderMax < goodShoulderMax"));
        }
        Ok(())
    }
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Sensitivity::default().config()
    }
}

/// Named sensitivity preset (settings slider: 1 = strict, 2 = normal, 3 = relaxed)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sensitivity {
    Strict,
    #[default]
    Normal,
    Relaxed,
}

impl Sensitivity {
    pub const ALL: [Sensitivity; 3] = [Sensitivity::Strict, Sensitivity::Normal, Sensitivity::Relaxed];

    pub fn from_level(level: u8) -> Result<Self, ConfigError> {
        match level {
            1 => Ok(Sensitivity::Strict),
            2 => Ok(Sensitivity::Normal),
            3 => Ok(Sensitivity::Relaxed),
            other => Err(ConfigError::UnknownSensitivity(other)),
        }
    }

    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        match name.to_ascii_lowercase().as_str() {
            "strict" => Ok(Sensitivity::Strict),
            "normal" => Ok(Sensitivity::Normal),
            "relaxed" => Ok(Sensitivity::Relaxed),
            _ => Err(ConfigError::UnknownSensitivityName(name.to_string())),
        }
    }

    pub fn level(&self) -> u8 {
        match self {
            Sensitivity::Strict => 1,
            Sensitivity::Normal => 2,
            Sensitivity::Relaxed => 3,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Sensitivity::Strict => "Strict",
            Sensitivity::Normal => "Normal",
            Sensitivity::Relaxed => "Relaxed",
        }
    }

    /// Threshold quadruple for this tier
    pub fn config(&self) -> ClassificationConfig {
        match self {
            Sensitivity::Strict => ClassificationConfig::STRICT,
            Sensitivity::Normal => ClassificationConfig::NORMAL,
            Sensitivity::Relaxed => ClassificationConfig::RELAXED,
        }
    }
}
