//! AlignMe - posture monitoring engine for the browser
//!
//! Entry point for WASM module. Contains:
//! - Module declarations
//! - Console logging and the panic hook
//! - Re-exports of the engine for native (rlib) users
//!
//! The page runs MediaPipe Pose and hands each frame's landmarks to
//! `update_landmarks`; everything from there to the displayed status is Rust.

// ============================================================================
// CONSOLE LOGGING
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => ($crate::log(&format_args!($($t)*).to_string()))
}
pub(crate) use console_log;

pub mod geometry;
pub mod classifier;
pub mod analyzer;
pub mod session;
mod bridge;

// Re-export wasm_bindgen functions for JS access
pub use bridge::*;

pub use analyzer::{analyze_frame, analyze_frame_with, AnalysisError, LandmarkSet};
pub use classifier::{
    classify, ClassificationConfig, PostureAngles, PostureClassifier, PostureStatus, Sensitivity,
};
pub use geometry::{compute_angle, Point2D};
pub use session::Monitor;

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Reset the monitor and log readiness; call once after the camera starts
#[wasm_bindgen]
pub fn init() {
    bridge::reset_session();
    console_log!("✅ Posture engine ready (MediaPipe Pose, {} landmarks)", analyzer::POSE_LANDMARK_COUNT);
}
