//! Display rounding matching the page's `Math.round` conventions

/// `Math.round(x)`: halves round toward positive infinity
pub fn js_round(x: f64) -> f64 {
    // `(x + 0.5).floor()` rounds the addition itself for values just below a half
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// `Math.round(x * 10) / 10`, one decimal place for the angle readouts
pub fn round_tenth(x: f64) -> f64 {
    js_round(x * 10.0) / 10.0
}
