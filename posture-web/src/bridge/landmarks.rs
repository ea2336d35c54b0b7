//! Landmark intake and per-frame readouts
//!
//! Receives MediaPipe Pose landmarks from JavaScript once per video frame
//! and runs them through the monitor.

use wasm_bindgen::prelude::*;

use super::state::{now_ms, with_state};
use crate::analyzer::LandmarkSet;
use crate::session::FrameOutcome;

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Called from JavaScript with a flat Float64Array, 3 values per landmark
/// (x, y, z). Pass an empty array when no pose was detected.
///
/// Returns the status to display ("good" | "okay" | "bad" | "checking").
#[wasm_bindgen]
pub fn update_landmarks(data: &[f64]) -> String {
    process_frame(data, 3)
}

/// Same as `update_landmarks` with 4 values per landmark (x, y, z, visibility)
#[wasm_bindgen]
pub fn update_landmarks_with_visibility(data: &[f64]) -> String {
    process_frame(data, 4)
}

/// Status currently displayed
#[wasm_bindgen]
pub fn get_status() -> String {
    with_state(|state| state.monitor.status().as_str().to_string())
}

/// `[neck, shoulder, back]` rounded to one decimal
#[wasm_bindgen]
pub fn get_angles() -> Vec<f64> {
    with_state(|state| state.monitor.display_angles().to_vec())
}

/// True once per due alert; the page plays the sound when this returns true
#[wasm_bindgen]
pub fn take_alert() -> bool {
    with_state(|state| std::mem::take(&mut state.alert_pending))
}

/// `[skipped, degenerate]` frame counts for the debug panel
#[wasm_bindgen]
pub fn get_frame_diagnostics() -> Vec<u32> {
    with_state(|state| {
        vec![
            state.monitor.skipped_frames(),
            state.monitor.degenerate_frames(),
        ]
    })
}

// ============================================================================
// INTERNAL API (no wasm_bindgen)
// ============================================================================

fn process_frame(data: &[f64], stride: usize) -> String {
    let landmarks = match LandmarkSet::from_flat(data, stride) {
        Ok(landmarks) => landmarks,
        Err(err) => {
            web_sys::console::warn_1(&format!("Invalid landmark data: {}", err).into());
            return get_status();
        }
    };

    let now = now_ms();
    with_state(|state| {
        match state.monitor.process_frame(&landmarks, now) {
            FrameOutcome::Classified { status, alert } => {
                if state.last_frame_skipped {
                    crate::console_log!("Pose reacquired");
                }
                state.last_frame_skipped = false;
                state.alert_pending |= alert;
                status.as_str().to_string()
            }
            FrameOutcome::Skipped(err) => {
                // Warn once per dropout, not every frame
                if !state.last_frame_skipped {
                    web_sys::console::warn_1(&format!("Skipping frame: {}", err).into());
                }
                state.last_frame_skipped = true;
                state.monitor.status().as_str().to_string()
            }
            FrameOutcome::Degenerate => {
                if !state.last_frame_skipped {
                    web_sys::console::warn_1(&"Skipping frame: degenerate back/neck geometry".into());
                }
                state.last_frame_skipped = true;
                state.monitor.status().as_str().to_string()
            }
        }
    })
}
