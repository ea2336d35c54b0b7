//! Settings panel entry points
//!
//! Sensitivity, custom thresholds, alert preferences and rule selection.
//! Changes take effect from the next frame.

use wasm_bindgen::prelude::*;

use super::state::with_state;
use crate::classifier::{ClassificationConfig, Sensitivity};
use crate::session::{ClassifierRule, MonitorSettings};

/// Slider level: 1 = strict, 2 = normal, 3 = relaxed
#[wasm_bindgen]
pub fn set_sensitivity(level: u8) -> Result<(), JsValue> {
    let sensitivity = Sensitivity::from_level(level)?;
    with_state(|state| state.monitor.set_sensitivity(sensitivity));
    crate::console_log!("Sensitivity: {}", sensitivity.name());
    Ok(())
}

/// Override the active tier with a custom threshold quadruple (JSON,
/// camelCase keys: goodBackMin, goodShoulderMax, okayBackMin, okayShoulderMax)
#[wasm_bindgen]
pub fn set_custom_thresholds(json: &str) -> Result<(), JsValue> {
    let config = ClassificationConfig::from_json(json)?;
    with_state(|state| state.monitor.set_custom_config(config))?;
    Ok(())
}

/// Active thresholds as JSON
#[wasm_bindgen]
pub fn get_thresholds() -> Result<String, JsValue> {
    let config = with_state(|state| *state.monitor.config());
    serde_json::to_string(&config).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Apply the whole settings panel at once (JSON, missing keys use defaults)
#[wasm_bindgen]
pub fn apply_settings(json: &str) -> Result<(), JsValue> {
    let settings = MonitorSettings::from_json(json)?;
    with_state(|state| state.monitor.apply_settings(settings))?;
    Ok(())
}

#[wasm_bindgen]
pub fn set_audio_alerts(enabled: bool) {
    with_state(|state| {
        state.monitor.set_audio_enabled(enabled);
        if !enabled {
            state.alert_pending = false;
        }
    });
}

/// Seconds between alerts (5-60, steps of 5)
#[wasm_bindgen]
pub fn set_alert_interval(secs: u32) -> Result<(), JsValue> {
    with_state(|state| state.monitor.set_alert_interval(secs))?;
    Ok(())
}

/// "threshold" (default), "joint-vote" or "neck-aware"
#[wasm_bindgen]
pub fn set_classifier_rule(name: &str) -> Result<(), JsValue> {
    let rule = name.parse::<ClassifierRule>().map_err(|e| JsValue::from_str(&e))?;
    with_state(|state| state.monitor.set_rule(rule));
    web_sys::console::log_1(&format!("Classifier rule: {:?}", rule).into());
    Ok(())
}
