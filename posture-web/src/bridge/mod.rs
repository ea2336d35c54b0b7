//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod errors;
mod state;
mod landmarks;
mod settings;
mod session;

pub use landmarks::{
    update_landmarks,
    update_landmarks_with_visibility,
    get_status,
    get_angles,
    take_alert,
    get_frame_diagnostics,
};

pub use settings::{
    set_sensitivity,
    set_custom_thresholds,
    get_thresholds,
    apply_settings,
    set_audio_alerts,
    set_alert_interval,
    set_classifier_rule,
};

pub use session::{
    start_session,
    pause_session,
    reset_session,
    restore_session_time,
    get_elapsed_seconds,
    get_session_clock,
    get_stats,
    get_percentages,
    get_chart_data,
    finish_session,
    load_session_history,
    get_session_history,
    clear_session_history,
};
