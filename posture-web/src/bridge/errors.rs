//! Error conversions at the JS boundary

use wasm_bindgen::prelude::*;

use crate::analyzer::LandmarkError;
use crate::classifier::ConfigError;
use crate::session::HistoryError;

impl From<ConfigError> for JsValue {
    fn from(err: ConfigError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl From<HistoryError> for JsValue {
    fn from(err: HistoryError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl From<LandmarkError> for JsValue {
    fn from(err: LandmarkError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
