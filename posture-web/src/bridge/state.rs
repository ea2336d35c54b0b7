//! Monitor storage shared by the bridge entry points

use std::cell::RefCell;

use crate::session::Monitor;

/// Everything the page's frame loop leaves behind between calls
#[derive(Default)]
pub(crate) struct BridgeState {
    pub monitor: Monitor,
    /// Set by a frame that wants the alert sound, cleared by `take_alert`
    pub alert_pending: bool,
    /// Previous frame had no usable pose
    pub last_frame_skipped: bool,
}

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static STATE: RefCell<BridgeState> = RefCell::new(BridgeState::default());
}

pub(crate) fn with_state<R>(f: impl FnOnce(&mut BridgeState) -> R) -> R {
    STATE.with(|state_cell| f(&mut state_cell.borrow_mut()))
}

/// Page clock in milliseconds
pub(crate) fn now_ms() -> f64 {
    js_sys::Date::now()
}
