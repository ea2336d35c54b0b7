//! Monitor settings as the settings panel sends them

use serde::{Deserialize, Serialize};

use super::alerts::{validate_alert_interval, DEFAULT_ALERT_INTERVAL_SECS};
use crate::classifier::{ConfigError, Sensitivity};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MonitorSettings {
    pub audio_enabled: bool,
    pub alert_interval_secs: u32,
    pub sensitivity: Sensitivity,
}

impl MonitorSettings {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Json(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_alert_interval(self.alert_interval_secs)?;
        Ok(())
    }
}

impl Default for MonitorSettings {
    fn default() -> Self {
        Self {
            audio_enabled: true,
            alert_interval_secs: DEFAULT_ALERT_INTERVAL_SECS,
            sensitivity: Sensitivity::Normal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = MonitorSettings::default();
        assert!(settings.audio_enabled);
        assert_eq!(settings.alert_interval_secs, 10);
        assert_eq!(settings.sensitivity, Sensitivity::Normal);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = MonitorSettings::from_json(r#"{"sensitivity":"strict"}"#).unwrap();
        assert_eq!(settings.sensitivity, Sensitivity::Strict);
        assert_eq!(settings.alert_interval_secs, DEFAULT_ALERT_INTERVAL_SECS);
    }

    #[test]
    fn test_invalid_interval_rejected() {
        assert_eq!(
            MonitorSettings::from_json(r#"{"alertIntervalSecs":3}"#),
            Err(ConfigError::AlertInterval(3))
        );
        assert!(matches!(
            MonitorSettings::from_json(r#"{"sensitivity":"lazy"}"#),
            Err(ConfigError::Json(_))
        ));
    }
}
