//! Session timer, statistics and history entry points
//!
//! Persistence stays in JavaScript: the page stores the JSON strings
//! returned here in localStorage and hands them back on load.

use wasm_bindgen::prelude::*;

use super::state::{now_ms, with_state};
use crate::session::{format_clock, SessionHistory};

#[wasm_bindgen]
pub fn start_session() {
    let now = now_ms();
    with_state(|state| state.monitor.start(now));
}

#[wasm_bindgen]
pub fn pause_session() {
    let now = now_ms();
    with_state(|state| state.monitor.pause(now));
}

/// Clear counters, timer and chart
#[wasm_bindgen]
pub fn reset_session() {
    let now = now_ms();
    with_state(|state| {
        state.monitor.reset_session(now);
        state.alert_pending = false;
    });
}

/// Continue from a saved elapsed time (seconds)
#[wasm_bindgen]
pub fn restore_session_time(seconds: u32) {
    with_state(|state| state.monitor.restore_elapsed(seconds as u64));
}

#[wasm_bindgen]
pub fn get_elapsed_seconds() -> u32 {
    let now = now_ms();
    with_state(|state| state.monitor.elapsed_seconds(now).min(u32::MAX as u64) as u32)
}

/// "HH:MM:SS"
#[wasm_bindgen]
pub fn get_session_clock() -> String {
    let now = now_ms();
    with_state(|state| format_clock(state.monitor.elapsed_seconds(now)))
}

/// `[good, okay, bad]` frame counts
#[wasm_bindgen]
pub fn get_stats() -> Vec<u32> {
    with_state(|state| {
        let stats = state.monitor.stats();
        vec![stats.good, stats.okay, stats.bad]
    })
}

/// `[good, okay, bad]` whole-number percentages
#[wasm_bindgen]
pub fn get_percentages() -> Vec<u32> {
    with_state(|state| {
        let pct = state.monitor.stats().percentages();
        vec![pct.good, pct.okay, pct.bad]
    })
}

/// Last 20 angle samples, oldest first, as JSON
#[wasm_bindgen]
pub fn get_chart_data() -> Result<String, JsValue> {
    with_state(|state| state.monitor.chart().to_json())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Close the current session; returns the updated history JSON to persist
#[wasm_bindgen]
pub fn finish_session(date: &str) -> Result<String, JsValue> {
    let now = now_ms();
    let json = with_state(|state| {
        let summary = state.monitor.finish_session(now, date);
        crate::console_log!(
            "Session saved: {}s, {}% good",
            summary.duration,
            summary.good_percentage
        );
        state.monitor.sessions().to_json()
    })?;
    Ok(json)
}

#[wasm_bindgen]
pub fn load_session_history(json: &str) -> Result<(), JsValue> {
    let history = SessionHistory::from_json(json)?;
    with_state(|state| state.monitor.load_sessions(history));
    Ok(())
}

#[wasm_bindgen]
pub fn get_session_history() -> Result<String, JsValue> {
    Ok(with_state(|state| state.monitor.sessions().to_json())?)
}

#[wasm_bindgen]
pub fn clear_session_history() {
    with_state(|state| state.monitor.clear_sessions());
}
